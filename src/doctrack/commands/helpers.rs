use crate::error::{DocTrackError, Result};
use crate::store::DocumentStore;
use uuid::Uuid;

/// Length of the id prefix shown in tables.
pub const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..SHORT_ID_LEN].to_string()
}

/// Resolves user input to a document id.
///
/// A full UUID is returned as-is, even when no such document exists, so that callers keep
/// their own not-found semantics. Anything else is treated as an id prefix and must match
/// exactly one stored document.
pub fn resolve_id<S: DocumentStore>(store: &S, input: &str) -> Result<Uuid> {
    let input = input.trim();
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let prefix = input.replace('-', "").to_lowercase();
    if prefix.is_empty() {
        return Err(DocTrackError::Api("Document id cannot be empty".into()));
    }

    let snapshot = store.snapshot();
    let mut matches = snapshot
        .iter()
        .filter(|r| r.id.simple().to_string().starts_with(&prefix))
        .map(|r| r.id);

    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(DocTrackError::Api(format!(
            "No document matches id '{}'",
            input
        ))),
        (Some(_), Some(_)) => Err(DocTrackError::Api(format!(
            "Id prefix '{}' is ambiguous",
            input
        ))),
    }
}
