use crate::commands::CmdResult;
use crate::error::{DocTrackError, Result};
use tracing::debug;
use uuid::Uuid;

/// Editing records is not available. Callers always get a typed `NotSupported`.
pub fn run(id: &Uuid) -> Result<CmdResult> {
    debug!(%id, "edit requested");
    Err(DocTrackError::NotSupported("edit"))
}
