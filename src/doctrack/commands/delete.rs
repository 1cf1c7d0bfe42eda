use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;
use tracing::{debug, info};
use uuid::Uuid;

/// Removes the document with `id`. An unknown id is a no-op, not an error.
pub fn run<S: DocumentStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove(id) {
        Some(record) => {
            info!(%id, name = %record.name, "document deleted");
            result.add_message(CmdMessage::success(format!(
                "Document deleted: {}",
                record.name
            )));
            result.affected_documents.push(record);
        }
        None => {
            debug!(%id, "delete of unknown id ignored");
            result.add_message(CmdMessage::info(format!(
                "No document with id {}, nothing deleted",
                id
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::NewDocument;
    use crate::status::Derivation;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn add_one(store: &mut InMemoryStore, name: &str) -> Uuid {
        let derivation = Derivation::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        add::run(
            store,
            NewDocument::new(name, "Ann", "2030-01-01"),
            &derivation,
        )
        .unwrap()
        .affected_documents[0]
            .id
    }

    #[test]
    fn removes_the_document() {
        let mut store = InMemoryStore::new();
        let keep = add_one(&mut store, "Keep");
        let gone = add_one(&mut store, "Gone");

        let result = run(&mut store, &gone).unwrap();

        assert_eq!(result.affected_documents[0].name, "Gone");
        assert!(store.get(&gone).is_none());
        assert!(store.get(&keep).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut store = InMemoryStore::new();
        add_one(&mut store, "Keep");
        let before = store.snapshot();

        let result = run(&mut store, &Uuid::new_v4()).unwrap();

        assert!(result.affected_documents.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Info
        ));
        assert_eq!(*before, *store.snapshot());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn deleting_twice_is_idempotent() {
        let mut store = InMemoryStore::new();
        let id = add_one(&mut store, "Once");

        run(&mut store, &id).unwrap();
        run(&mut store, &id).unwrap();

        assert!(store.is_empty());
    }
}
