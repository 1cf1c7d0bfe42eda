use crate::commands::{CmdResult, ALL_TYPES};
use crate::error::Result;
use crate::model::{DocumentRecord, DocumentType, BUILTIN_TYPES};
use crate::store::DocumentStore;

/// `"All"` followed by each used type, in order of first appearance.
pub fn document_types(records: &[DocumentRecord]) -> Vec<String> {
    let mut types = vec![ALL_TYPES.to_string()];
    for record in records {
        let name = record.doc_type.as_str();
        if !types[1..].iter().any(|t| t == name) {
            types.push(name.to_string());
        }
    }
    types
}

/// Categories offered when adding a record: the built-in ones, then any other used
/// category in order of first appearance.
pub fn category_choices(records: &[DocumentRecord]) -> Vec<DocumentType> {
    let mut choices: Vec<DocumentType> =
        BUILTIN_TYPES.iter().map(|t| DocumentType::new(*t)).collect();
    for record in records {
        if !choices.contains(&record.doc_type) {
            choices.push(record.doc_type.clone());
        }
    }
    choices
}

pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_document_types(document_types(&store.snapshot())))
}
