//! Starter documents loaded into a fresh session.
//!
//! One of them always expires 20 days after the reference date, so a new session shows
//! every status at least once.

use crate::commands::add;
use crate::error::Result;
use crate::model::{NewDocument, CREDIT, NO_EXPIRY_SENTINEL, OTHER, PERSONNEL};
use crate::status::Derivation;
use crate::store::DocumentStore;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Sample documents in display order (first entry shown first).
pub fn sample_documents(today: NaiveDate) -> Vec<NewDocument> {
    let soon = (today + Duration::days(20)).format("%Y-%m-%d").to_string();

    vec![
        NewDocument::new("330/TCT-QLDT-XD", "Pham Van A", "2025-07-23")
            .with_type(PERSONNEL)
            .with_summary("Guidance on internal investment management procedures"),
        NewDocument::new("1879/QD-NHNo-CNTT", "Tran Thi B", soon)
            .with_type(OTHER)
            .with_summary("IT system security and confidentiality regulations"),
        NewDocument::new("10296/NHNo-PCRT", "Le Van C", NO_EXPIRY_SENTINEL)
            .with_type(OTHER)
            .with_summary("Notice of the sanctions policy of Bank of America, USA"),
        NewDocument::new("18793/NHNo-RRDT", "Nguyen Thi D", NO_EXPIRY_SENTINEL)
            .with_type(CREDIT)
            .with_summary("Debt classification review following the CIC notice of 30/11/2024"),
        NewDocument::new("Employment contract - Staff E", "Nguyen Thi D", "2023-12-31")
            .with_type(PERSONNEL)
            .with_summary("One-year employment contract for a new hire"),
    ]
}

/// Adds the samples so that the store lists them in display order. Returns how many
/// were added.
pub fn seed<S: DocumentStore>(store: &mut S, derivation: &Derivation) -> Result<usize> {
    let samples = sample_documents(derivation.today);
    let count = samples.len();
    // add prepends, so insert back to front
    for doc in samples.into_iter().rev() {
        add::run(store, doc, derivation)?;
    }
    debug!(count, "seeded sample documents");
    Ok(count)
}
