//! # Status Classification
//!
//! A document's status is a pure function of its expiry date and the reference date:
//!
//! ```text
//!   indefinite                      -> Valid
//!   expiry <  today                 -> Expired
//!   today <= expiry <= today+window -> ExpiringSoon
//!   expiry >  today+window          -> Valid
//! ```
//!
//! Both dates are calendar dates, so there is no time-of-day sensitivity. The window
//! boundary is inclusive: a document expiring exactly `window` days out is expiring soon.

use crate::model::{DerivedView, DocumentRecord, ExpiryDate, Status};
use chrono::NaiveDate;

/// Default look-ahead for [`Status::ExpiringSoon`].
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Display text for the no-expiry sentinel.
pub const NO_EXPIRY_LABEL: &str = "No expiry";

pub fn classify(expiry: &ExpiryDate, today: NaiveDate, window_days: i64) -> Status {
    let date = match expiry {
        ExpiryDate::Indefinite => return Status::Valid,
        ExpiryDate::On(date) => *date,
    };

    let diff_days = date.signed_duration_since(today).num_days();
    if diff_days < 0 {
        Status::Expired
    } else if diff_days <= window_days {
        Status::ExpiringSoon
    } else {
        Status::Valid
    }
}

/// Renders an expiry date as `DD/MM/YYYY`, or the fixed no-expiry label.
pub fn format_expiry(expiry: &ExpiryDate) -> String {
    format_expiry_with(expiry, NO_EXPIRY_LABEL)
}

pub fn format_expiry_with(expiry: &ExpiryDate, no_expiry_label: &str) -> String {
    match expiry {
        ExpiryDate::Indefinite => no_expiry_label.to_string(),
        ExpiryDate::On(date) => date.format("%d/%m/%Y").to_string(),
    }
}

/// Parameters every derived read needs.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub today: NaiveDate,
    pub window_days: i64,
    pub no_expiry_label: String,
}

impl Derivation {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            window_days: EXPIRING_SOON_DAYS,
            no_expiry_label: NO_EXPIRY_LABEL.to_string(),
        }
    }

    pub fn with_window(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_no_expiry_label(mut self, label: impl Into<String>) -> Self {
        self.no_expiry_label = label.into();
        self
    }
}

pub fn derive_view(record: &DocumentRecord, derivation: &Derivation) -> DerivedView {
    DerivedView {
        status: classify(
            &record.expiry_date,
            derivation.today,
            derivation.window_days,
        ),
        formatted_expiry_date: format_expiry_with(
            &record.expiry_date,
            &derivation.no_expiry_label,
        ),
        record: record.clone(),
    }
}

pub fn derive_views(records: &[DocumentRecord], derivation: &Derivation) -> Vec<DerivedView> {
    records
        .iter()
        .map(|record| derive_view(record, derivation))
        .collect()
}
