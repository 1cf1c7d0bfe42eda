use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DocTrackError {
    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid expiry date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Operation not supported: {0}")]
    NotSupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DocTrackError>;
