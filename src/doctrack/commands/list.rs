use crate::commands::{CmdResult, DocumentFilter};
use crate::error::Result;
use crate::model::DerivedView;
use crate::status::{derive_views, Derivation};
use crate::store::DocumentStore;
use tracing::debug;

/// Derives views for the whole collection and keeps the ones matching `filter`.
pub fn run<S: DocumentStore>(
    store: &S,
    filter: DocumentFilter,
    derivation: &Derivation,
) -> Result<CmdResult> {
    let snapshot = store.snapshot();
    let views = derive_views(&snapshot, derivation);
    let filtered = filter_views(&views, &filter);

    debug!(
        total = views.len(),
        shown = filtered.len(),
        ?filter,
        "listed documents"
    );

    Ok(CmdResult::default().with_listed_documents(filtered))
}

/// Type filter AND text search, preserving input order.
pub fn filter_views(views: &[DerivedView], filter: &DocumentFilter) -> Vec<DerivedView> {
    let needle = filter
        .search_term
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    views
        .iter()
        .filter(|view| filter.doc_type.matches(&view.record.doc_type))
        .filter(|view| match &needle {
            Some(needle) => matches_search(view, needle),
            None => true,
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(view: &DerivedView, needle: &str) -> bool {
    let record = &view.record;
    [
        record.name.as_str(),
        record.updated_by.name.as_str(),
        record.summary.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
