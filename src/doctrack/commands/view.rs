use crate::commands::CmdResult;
use crate::error::{DocTrackError, Result};
use crate::model::DerivedView;
use crate::status::{derive_view, Derivation};
use crate::store::DocumentStore;
use uuid::Uuid;

pub fn run<S: DocumentStore>(store: &S, id: &Uuid, derivation: &Derivation) -> Result<CmdResult> {
    let record = store
        .get(id)
        .ok_or(DocTrackError::DocumentNotFound(*id))?;
    let view = derive_view(&record, derivation);
    let detail = describe(&view);

    Ok(CmdResult::default()
        .with_listed_documents(vec![view])
        .with_detail(detail))
}

/// Read-only description of a single document.
pub fn describe(view: &DerivedView) -> String {
    let record = &view.record;
    let attachment = match &record.file {
        Some(file) => format!("Attachment: {}", file.name),
        None => "No attachment.".to_string(),
    };

    format!(
        "Document: {}\n\nSummary: {}\nUpdated by: {}\nExpires: {}\n{}",
        record.name,
        record.summary,
        record.updated_by.name,
        view.formatted_expiry_date,
        attachment
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attachment, Status};
    use crate::store::memory::fixtures::{record, StoreFixture};
    use chrono::NaiveDate;

    fn derivation() -> Derivation {
        Derivation::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn describes_document_with_attachment() {
        let mut r = record("Lease", "Credit", "2025-07-23");
        r.summary = "Second floor".into();
        r.file = Some(Attachment {
            name: "lease.pdf".into(),
        });
        let fixture = StoreFixture::new().with_record(r.clone());

        let result = run(&fixture.store, &r.id, &derivation()).unwrap();
        let detail = result.detail.unwrap();

        assert!(detail.starts_with("Document: Lease"));
        assert!(detail.contains("Summary: Second floor"));
        assert!(detail.contains("Updated by: Test Clerk"));
        assert!(detail.contains("Expires: 23/07/2025"));
        assert!(detail.ends_with("Attachment: lease.pdf"));
        assert_eq!(result.listed_documents[0].status, Status::Valid);
    }

    #[test]
    fn describes_missing_attachment() {
        let r = record("Policy", "Other", "9999-01-01");
        let fixture = StoreFixture::new().with_record(r.clone());

        let detail = run(&fixture.store, &r.id, &derivation())
            .unwrap()
            .detail
            .unwrap();

        assert!(detail.contains("Expires: No expiry"));
        assert!(detail.ends_with("No attachment."));
    }

    #[test]
    fn empty_summary_is_still_found() {
        let mut r = record("Blank", "Other", "2030-01-01");
        r.summary.clear();
        let fixture = StoreFixture::new().with_record(r.clone());

        let result = run(&fixture.store, &r.id, &derivation()).unwrap();
        assert!(result.detail.unwrap().contains("Summary: \n"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new().with_document("Lease", "Credit", "2030-01-01");
        let missing = Uuid::new_v4();

        match run(&fixture.store, &missing, &derivation()) {
            Err(DocTrackError::DocumentNotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected DocumentNotFound, got {:?}", other),
        }
    }
}
