use crate::model::{DerivedView, DocumentRecord, DocumentType};
use std::convert::Infallible;
use std::str::FromStr;

pub mod add;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod stats;
pub mod types;
pub mod view;

pub use stats::DocumentStats;

/// Type filter sentinel that matches every record.
pub const ALL_TYPES: &str = "All";

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_documents: Vec<DocumentRecord>,
    pub listed_documents: Vec<DerivedView>,
    /// Composed read-only description, set by `view`
    pub detail: Option<String>,
    pub stats: Option<DocumentStats>,
    pub document_types: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_documents(mut self, documents: Vec<DocumentRecord>) -> Self {
        self.affected_documents = documents;
        self
    }

    pub fn with_listed_documents(mut self, documents: Vec<DerivedView>) -> Self {
        self.listed_documents = documents;
        self
    }

    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_stats(mut self, stats: DocumentStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_document_types(mut self, types: Vec<String>) -> Self {
        self.document_types = types;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(DocumentType),
}

impl TypeFilter {
    pub fn matches(&self, doc_type: &DocumentType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => wanted == doc_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_TYPES) {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(DocumentType::new(s)))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub doc_type: TypeFilter,
    pub search_term: Option<String>,
}

impl DocumentFilter {
    /// An empty search term means no search. Any other term is matched as given.
    pub fn new(doc_type: &str, search_term: &str) -> Self {
        Self {
            doc_type: doc_type.parse().unwrap_or_default(),
            search_term: (!search_term.is_empty()).then(|| search_term.to_string()),
        }
    }
}
