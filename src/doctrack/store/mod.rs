//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts the ordered record collection. The only
//! implementation is [`memory::InMemoryStore`]: records live for the lifetime of the
//! session and are never written anywhere.
//!
//! ## Ordering
//!
//! The collection is newest first. `insert_front` prepends, `remove` preserves the
//! relative order of the remaining records.
//!
//! ## Snapshots and Change Notification
//!
//! Every mutation replaces the collection with a new one, so a [`Snapshot`] taken before
//! a mutation never changes under the holder. After each mutation the store bumps its
//! revision and calls every subscribed listener with a [`StoreEvent`]; listeners run
//! synchronously inside the mutating call. Presentation code uses this to know when to
//! re-pull derived views.

use crate::error::Result;
use crate::model::DocumentRecord;
use std::sync::Arc;
use uuid::Uuid;

pub mod memory;

/// Immutable view of the collection at one revision.
pub type Snapshot = Arc<[DocumentRecord]>;

/// Callback invoked after every store mutation.
pub type StoreListener = Box<dyn FnMut(&StoreEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Uuid),
    Removed(Uuid),
}

/// Abstract interface for the document collection.
pub trait DocumentStore {
    /// Prepend a record. Fails if a record with the same id is already stored.
    fn insert_front(&mut self, record: DocumentRecord) -> Result<()>;

    /// Remove a record by id, returning it if it was present.
    fn remove(&mut self, id: &Uuid) -> Option<DocumentRecord>;

    /// Look up a record by id
    fn get(&self, id: &Uuid) -> Option<DocumentRecord>;

    /// The current collection, newest first
    fn snapshot(&self) -> Snapshot;

    /// Monotonic counter, bumped once per mutation
    fn revision(&self) -> u64;

    fn subscribe(&mut self, listener: StoreListener);
}
