use crate::error::{DocTrackError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Literal stored for documents that never expire.
pub const NO_EXPIRY_SENTINEL: &str = "9999-01-01";

pub const PERSONNEL: &str = "Personnel";
pub const CREDIT: &str = "Credit";
pub const OTHER: &str = "Other";

/// Categories offered before any record has introduced its own.
pub const BUILTIN_TYPES: [&str; 3] = [PERSONNEL, CREDIT, OTHER];

/// An expiry date, or the sentinel meaning the document is valid indefinitely.
///
/// Parsing is strict: only `YYYY-MM-DD` naming a real calendar date is accepted, plus the
/// sentinel literal. Values are (de)serialized through the same string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExpiryDate {
    Indefinite,
    On(NaiveDate),
}

impl ExpiryDate {
    pub fn is_indefinite(&self) -> bool {
        matches!(self, ExpiryDate::Indefinite)
    }
}

impl FromStr for ExpiryDate {
    type Err = DocTrackError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == NO_EXPIRY_SENTINEL {
            return Ok(ExpiryDate::Indefinite);
        }

        // chrono tolerates padded, unpadded and signed fields, the stored form does not
        let b = s.as_bytes();
        let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);
        if b.len() != 10
            || b[4] != b'-'
            || b[7] != b'-'
            || !digits(0..4)
            || !digits(5..7)
            || !digits(8..10)
        {
            return Err(DocTrackError::InvalidDate(s.to_string()));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ExpiryDate::On)
            .map_err(|_| DocTrackError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryDate::Indefinite => f.write_str(NO_EXPIRY_SENTINEL),
            ExpiryDate::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl TryFrom<String> for ExpiryDate {
    type Error = DocTrackError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ExpiryDate> for String {
    fn from(value: ExpiryDate) -> Self {
        value.to_string()
    }
}

/// Open-ended document category. New categories come into existence by being used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentType(String);

impl DocumentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::new(OTHER)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsibleParty {
    pub name: String,
}

impl ResponsibleParty {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Opaque reference to an attached file. Only the name is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub expiry_date: ExpiryDate,
    pub updated_by: ResponsibleParty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Attachment>,
}

/// Raw create input: every record field except the id.
///
/// The expiry date stays a string until the create boundary validates it.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub name: String,
    pub summary: String,
    /// `None` lets the caller's default category apply
    pub doc_type: Option<DocumentType>,
    pub expiry_date: String,
    pub updated_by: String,
    pub file: Option<String>,
}

impl NewDocument {
    pub fn new(
        name: impl Into<String>,
        updated_by: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            updated_by: updated_by.into(),
            expiry_date: expiry_date.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(DocumentType::new(doc_type));
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Valid,
    ExpiringSoon,
    Expired,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Valid => "Valid",
            Status::ExpiringSoon => "Expiring soon",
            Status::Expired => "Expired",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record plus its read-time fields. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    #[serde(flatten)]
    pub record: DocumentRecord,
    pub status: Status,
    pub formatted_expiry_date: String,
}
