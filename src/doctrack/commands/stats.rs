use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{DerivedView, Status};
use crate::status::{derive_views, Derivation};
use crate::store::DocumentStore;
use serde::Serialize;

/// Per-status counts. The three status counts always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub valid: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

pub fn aggregate(views: &[DerivedView]) -> DocumentStats {
    views
        .iter()
        .fold(DocumentStats::default(), |mut stats, view| {
            stats.total += 1;
            match view.status {
                Status::Valid => stats.valid += 1,
                Status::ExpiringSoon => stats.expiring_soon += 1,
                Status::Expired => stats.expired += 1,
            }
            stats
        })
}

/// Counts over the whole collection, regardless of any list filter.
pub fn run<S: DocumentStore>(store: &S, derivation: &Derivation) -> Result<CmdResult> {
    let views = derive_views(&store.snapshot(), derivation);
    Ok(CmdResult::default().with_stats(aggregate(&views)))
}
