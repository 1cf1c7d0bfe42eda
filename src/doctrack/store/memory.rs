use super::{DocumentStore, Snapshot, StoreEvent, StoreListener};
use crate::error::{DocTrackError, Result};
use crate::model::DocumentRecord;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub struct InMemoryStore {
    records: Snapshot,
    revision: u64,
    listeners: Vec<StoreListener>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn replace(&mut self, records: Vec<DocumentRecord>, event: StoreEvent) {
        self.records = Arc::from(records);
        self.revision += 1;
        debug!(
            revision = self.revision,
            listeners = self.listeners.len(),
            ?event,
            "store changed"
        );
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl DocumentStore for InMemoryStore {
    fn insert_front(&mut self, record: DocumentRecord) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(DocTrackError::Store(format!(
                "Duplicate document id: {}",
                record.id
            )));
        }

        let id = record.id;
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(record);
        next.extend(self.records.iter().cloned());
        self.replace(next, StoreEvent::Added(id));
        Ok(())
    }

    fn remove(&mut self, id: &Uuid) -> Option<DocumentRecord> {
        let position = self.records.iter().position(|r| &r.id == id)?;
        let removed = self.records[position].clone();

        let next = self
            .records
            .iter()
            .filter(|r| &r.id != id)
            .cloned()
            .collect();
        self.replace(next, StoreEvent::Removed(*id));
        Some(removed)
    }

    fn get(&self, id: &Uuid) -> Option<DocumentRecord> {
        self.records.iter().find(|r| &r.id == id).cloned()
    }

    fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.records)
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn subscribe(&mut self, listener: StoreListener) {
        self.listeners.push(listener);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{DocumentType, ExpiryDate, ResponsibleParty};

    pub fn record(name: &str, doc_type: &str, expiry: &str) -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            summary: format!("Summary of {}", name),
            doc_type: DocumentType::new(doc_type),
            expiry_date: expiry.parse::<ExpiryDate>().unwrap(),
            updated_by: ResponsibleParty::new("Test Clerk"),
            file: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_document(mut self, name: &str, doc_type: &str, expiry: &str) -> Self {
            self.store
                .insert_front(record(name, doc_type, expiry))
                .unwrap();
            self
        }

        pub fn with_record(mut self, record: DocumentRecord) -> Self {
            self.store.insert_front(record).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{record, StoreFixture};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn insert_front_keeps_newest_first() {
        let fixture = StoreFixture::new()
            .with_document("First", "Other", "2030-01-01")
            .with_document("Second", "Other", "2030-01-01");

        let snapshot = fixture.store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "Second");
        assert_eq!(snapshot[1].name, "First");
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = InMemoryStore::new();
        let r = record("Lease", "Credit", "2030-01-01");
        store.insert_front(r.clone()).unwrap();

        match store.insert_front(r) {
            Err(DocTrackError::Store(msg)) => assert!(msg.contains("Duplicate")),
            other => panic!("Expected Store error, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn remove_returns_record_and_preserves_order() {
        let a = record("A", "Other", "2030-01-01");
        let b = record("B", "Other", "2030-01-01");
        let c = record("C", "Other", "2030-01-01");
        let mut fixture = StoreFixture::new()
            .with_record(a.clone())
            .with_record(b.clone())
            .with_record(c.clone());

        let removed = fixture.store.remove(&b.id).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<_> = fixture
            .store
            .snapshot()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let mut fixture = StoreFixture::new().with_document("A", "Other", "2030-01-01");
        let before = fixture.store.snapshot();
        let revision = fixture.store.revision();

        assert!(fixture.store.remove(&Uuid::new_v4()).is_none());
        assert_eq!(fixture.store.revision(), revision);
        assert!(Arc::ptr_eq(&before, &fixture.store.snapshot()));
    }

    #[test]
    fn mutation_replaces_the_collection() {
        let mut store = InMemoryStore::new();
        store
            .insert_front(record("A", "Other", "2030-01-01"))
            .unwrap();
        let before = store.snapshot();

        store
            .insert_front(record("B", "Other", "2030-01-01"))
            .unwrap();

        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn listeners_fire_once_per_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut store = InMemoryStore::new();
        store.subscribe(Box::new(move |event: &StoreEvent| {
            sink.borrow_mut().push(*event)
        }));

        let r = record("A", "Other", "2030-01-01");
        store.insert_front(r.clone()).unwrap();
        store.remove(&r.id);
        store.remove(&r.id);

        assert_eq!(
            *events.borrow(),
            vec![StoreEvent::Added(r.id), StoreEvent::Removed(r.id)]
        );
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn get_finds_by_id() {
        let r = record("Lease", "Credit", "9999-01-01");
        let fixture = StoreFixture::new().with_record(r.clone());
        assert_eq!(fixture.store.get(&r.id), Some(r));
        assert!(fixture.store.get(&Uuid::new_v4()).is_none());
    }
}
