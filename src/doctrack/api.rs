//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every client.
//!
//! The facade:
//! - **Dispatches** to the command functions
//! - **Supplies the derivation context**: the reference date and the configured
//!   expiring-soon window and no-expiry label
//! - **Normalizes inputs**: short id prefixes become UUIDs
//!
//! It does no formatting and no I/O. `DocTrackApi<S: DocumentStore>` is generic over the
//! store so clients and tests can hand it any implementation.
//!
//! ## Reference Date
//!
//! By default "today" is the local calendar date, read on every call so a long session
//! rolls over at midnight. [`DocTrackApi::with_today`] pins it, which the CLI exposes as
//! `--today` and tests use for determinism.

use crate::commands;
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::model::{DocumentType, NewDocument};
use crate::samples;
use crate::status::Derivation;
use crate::store::{DocumentStore, StoreListener};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub use commands::{CmdMessage, CmdResult, DocumentFilter, DocumentStats, MessageLevel, TypeFilter};

pub struct DocTrackApi<S: DocumentStore> {
    store: S,
    config: TrackerConfig,
    pinned_today: Option<NaiveDate>,
}

impl<S: DocumentStore> DocTrackApi<S> {
    pub fn new(store: S, config: TrackerConfig) -> Self {
        Self {
            store,
            config,
            pinned_today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn derivation(&self) -> Derivation {
        Derivation::new(self.today())
            .with_window(self.config.expiring_soon_days)
            .with_no_expiry_label(self.config.no_expiry_label.clone())
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fills in the configured default category when the input has none.
    pub fn add_document(&mut self, mut input: NewDocument) -> Result<commands::CmdResult> {
        let blank = input
            .doc_type
            .as_ref()
            .map_or(true, |t| t.as_str().trim().is_empty());
        if blank {
            input.doc_type = Some(self.config.default_category());
        }
        let derivation = self.derivation();
        commands::add::run(&mut self.store, input, &derivation)
    }

    pub fn delete_document(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = self.resolve_id(id)?;
        commands::delete::run(&mut self.store, &id)
    }

    pub fn view_document(&self, id: &str) -> Result<commands::CmdResult> {
        let id = self.resolve_id(id)?;
        commands::view::run(&self.store, &id, &self.derivation())
    }

    pub fn edit_document(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = self.resolve_id(id)?;
        commands::edit::run(&id)
    }

    pub fn list_documents(&self, filter: DocumentFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter, &self.derivation())
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, &self.derivation())
    }

    pub fn document_types(&self) -> Result<commands::CmdResult> {
        commands::types::run(&self.store)
    }

    pub fn category_choices(&self) -> Vec<DocumentType> {
        commands::types::category_choices(&self.store.snapshot())
    }

    pub fn seed_samples(&mut self) -> Result<usize> {
        let derivation = self.derivation();
        samples::seed(&mut self.store, &derivation)
    }

    pub fn resolve_id(&self, input: &str) -> Result<Uuid> {
        commands::helpers::resolve_id(&self.store, input)
    }

    pub fn subscribe(&mut self, listener: StoreListener) {
        self.store.subscribe(listener);
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocTrackError;
    use crate::model::Status;
    use crate::store::memory::InMemoryStore;
    use crate::store::StoreEvent;
    use std::cell::Cell;
    use std::rc::Rc;

    fn api() -> DocTrackApi<InMemoryStore> {
        DocTrackApi::new(InMemoryStore::new(), TrackerConfig::default())
            .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn add(api: &mut DocTrackApi<InMemoryStore>, name: &str, expiry: &str) -> Uuid {
        api.add_document(NewDocument::new(name, "Ann", expiry))
            .unwrap()
            .affected_documents[0]
            .id
    }

    #[test]
    fn end_to_end_statuses() {
        let mut api = api();
        add(&mut api, "Soon", "2025-01-15");
        add(&mut api, "Later", "2025-02-15");
        add(&mut api, "Past", "2024-12-01");

        let listed = api.list_documents(DocumentFilter::default()).unwrap();
        let statuses: Vec<_> = listed
            .listed_documents
            .iter()
            .map(|v| (v.record.name.as_str(), v.status))
            .collect();

        assert_eq!(
            statuses,
            vec![
                ("Past", Status::Expired),
                ("Later", Status::Valid),
                ("Soon", Status::ExpiringSoon),
            ]
        );
    }

    #[test]
    fn uses_configured_window_and_label() {
        let config = TrackerConfig {
            expiring_soon_days: 10,
            no_expiry_label: "Indefinite".into(),
            ..Default::default()
        };
        let mut api = DocTrackApi::new(InMemoryStore::new(), config)
            .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        add(&mut api, "Soon", "2025-01-15");
        add(&mut api, "Forever", "9999-01-01");

        let listed = api.list_documents(DocumentFilter::default()).unwrap();
        assert_eq!(listed.listed_documents[0].formatted_expiry_date, "Indefinite");
        assert_eq!(listed.listed_documents[1].status, Status::Valid);
    }

    #[test]
    fn default_type_comes_from_config() {
        let config = TrackerConfig {
            default_type: "Credit".into(),
            ..Default::default()
        };
        let mut api = DocTrackApi::new(InMemoryStore::new(), config);
        let result = api
            .add_document(NewDocument::new("Loan", "Ann", "2030-01-01"))
            .unwrap();
        assert_eq!(result.affected_documents[0].doc_type.as_str(), "Credit");
    }

    #[test]
    fn unusable_default_type_falls_back_to_other() {
        let config = TrackerConfig {
            default_type: "All".into(),
            ..Default::default()
        };
        let mut api = DocTrackApi::new(InMemoryStore::new(), config);
        let result = api
            .add_document(NewDocument::new("Lease", "Ann", "2030-01-01"))
            .unwrap();
        assert_eq!(result.affected_documents[0].doc_type.as_str(), "Other");
    }

    #[test]
    fn view_and_delete_accept_short_ids() {
        let mut api = api();
        let id = add(&mut api, "Lease", "2030-01-01");
        let short = commands::helpers::short_id(&id);

        let viewed = api.view_document(&short).unwrap();
        assert!(viewed.detail.unwrap().contains("Lease"));

        api.delete_document(&short).unwrap();
        assert!(api.store().get(&id).is_none());
    }

    #[test]
    fn view_of_deleted_full_id_is_not_found() {
        let mut api = api();
        let id = add(&mut api, "Lease", "2030-01-01");
        api.delete_document(&id.to_string()).unwrap();

        assert!(matches!(
            api.view_document(&id.to_string()),
            Err(DocTrackError::DocumentNotFound(_))
        ));
        // deleting again is still fine
        assert!(api.delete_document(&id.to_string()).is_ok());
    }

    #[test]
    fn edit_is_not_supported() {
        let mut api = api();
        let id = add(&mut api, "Lease", "2030-01-01");
        assert!(matches!(
            api.edit_document(&id.to_string()),
            Err(DocTrackError::NotSupported("edit"))
        ));
        assert!(api.store().get(&id).is_some());
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let mut api = api();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        api.subscribe(Box::new(move |_: &StoreEvent| seen.set(seen.get() + 1)));

        let id = add(&mut api, "Lease", "2030-01-01");
        api.delete_document(&id.to_string()).unwrap();
        api.list_documents(DocumentFilter::default()).unwrap();

        assert_eq!(count.get(), 2);
        assert_eq!(api.revision(), 2);
    }

    #[test]
    fn stats_ignore_list_filters() {
        let mut api = api();
        add(&mut api, "Soon", "2025-01-15");
        add(&mut api, "Past", "2024-12-01");

        let filtered = api
            .list_documents(DocumentFilter::new("All", "soon"))
            .unwrap();
        assert_eq!(filtered.listed_documents.len(), 1);

        let stats = api.stats().unwrap().stats.unwrap();
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn seeded_session_lists_types() {
        let mut api = api();
        api.seed_samples().unwrap();
        let types = api.document_types().unwrap().document_types;
        assert_eq!(types, vec!["All", "Personnel", "Other", "Credit"]);
    }
}
