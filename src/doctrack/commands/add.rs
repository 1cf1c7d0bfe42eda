use crate::commands::{CmdMessage, CmdResult, ALL_TYPES};
use crate::error::{DocTrackError, Result};
use crate::model::{
    Attachment, DocumentRecord, DocumentType, ExpiryDate, NewDocument, ResponsibleParty,
};
use crate::status::{derive_view, Derivation};
use crate::store::DocumentStore;
use tracing::info;
use uuid::Uuid;

/// Validates the input, assigns a fresh id, and prepends the record.
///
/// Nothing reaches the store unless name, responsible party and expiry date are all
/// present and the expiry date parses.
pub fn run<S: DocumentStore>(
    store: &mut S,
    input: NewDocument,
    derivation: &Derivation,
) -> Result<CmdResult> {
    let record = validate(input)?;
    let view = derive_view(&record, derivation);

    store.insert_front(record.clone())?;
    info!(id = %record.id, name = %record.name, "document added");

    let mut result = CmdResult::default()
        .with_affected_documents(vec![record.clone()])
        .with_listed_documents(vec![view]);
    result.add_message(CmdMessage::success(format!(
        "Document added: {}",
        record.name
    )));
    Ok(result)
}

fn validate(input: NewDocument) -> Result<DocumentRecord> {
    let name = input.name.trim();
    let updated_by = input.updated_by.trim();
    let expiry = input.expiry_date.trim();

    let missing: Vec<&str> = [
        ("name", name),
        ("responsible party", updated_by),
        ("expiry date", expiry),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(DocTrackError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let expiry_date: ExpiryDate = expiry.parse()?;

    let doc_type = match input.doc_type.as_ref().map_or("", |t| t.as_str().trim()) {
        "" => DocumentType::default(),
        t if t.eq_ignore_ascii_case(ALL_TYPES) => {
            return Err(DocTrackError::Validation(format!(
                "'{}' is reserved for the type filter",
                t
            )));
        }
        t => DocumentType::new(t),
    };

    let file = input
        .file
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .map(|name| Attachment { name });

    Ok(DocumentRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        summary: input.summary.trim().to_string(),
        doc_type,
        expiry_date,
        updated_by: ResponsibleParty::new(updated_by),
        file,
    })
}
