//! ComplaintLogService
//!
//! Business logic for complaint intake

use super::types::{Complaint, SubmitComplaintRequest, STATUS_PENDING};
use crate::record_store::{RecordKind, RecordStore};
use chrono::Utc;
use std::sync::Arc;

/// ComplaintLogService instance
pub struct ComplaintLogService {
    store: Arc<RecordStore>,
}

impl ComplaintLogService {
    /// Create new ComplaintLogService
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Record a new complaint
    ///
    /// Identifier, timestamp, and status are server-assigned. Returns
    /// whether the persist succeeded; failures are logged, never raised.
    pub async fn submit_complaint(&self, req: SubmitComplaintRequest) -> bool {
        let result = self
            .store
            .update::<Complaint, _>(RecordKind::Complaints, |complaints| {
                let complaint = Complaint {
                    id: complaints.len() as u64 + 1,
                    description: req.description.unwrap_or_default(),
                    proof_link: req.proof_link.unwrap_or_default(),
                    timestamp: Utc::now().to_rfc3339(),
                    status: STATUS_PENDING.to_string(),
                };
                tracing::info!(id = complaint.id, "Complaint recorded");
                complaints.push(complaint);
            })
            .await;

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist complaint");
                false
            }
        }
    }

    /// List all complaints in submission order
    pub async fn list_complaints(&self) -> Vec<Complaint> {
        match self.store.load::<Complaint>(RecordKind::Complaints).await {
            Ok(complaints) => complaints,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load complaints");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_service() -> (ComplaintLogService, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let service = ComplaintLogService::new(Arc::new(RecordStore::new(dir.path())));
        (service, dir)
    }

    #[tokio::test]
    async fn submit_assigns_server_fields() {
        let (service, _dir) = test_service();
        let req = SubmitComplaintRequest {
            description: Some("harassment near gate 4".to_string()),
            proof_link: Some("https://example.com/clip.mp4".to_string()),
        };

        assert!(service.submit_complaint(req).await);

        let complaints = service.list_complaints().await;
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].id, 1);
        assert_eq!(complaints[0].status, STATUS_PENDING);
        assert!(!complaints[0].timestamp.is_empty());
    }

    #[tokio::test]
    async fn missing_fields_default_to_empty_strings() {
        let (service, _dir) = test_service();

        assert!(service.submit_complaint(SubmitComplaintRequest::default()).await);

        let complaints = service.list_complaints().await;
        assert_eq!(complaints[0].description, "");
        assert_eq!(complaints[0].proof_link, "");
    }

    #[tokio::test]
    async fn listing_preserves_submission_order() {
        let (service, _dir) = test_service();
        for desc in ["first", "second"] {
            let req = SubmitComplaintRequest {
                description: Some(desc.to_string()),
                proof_link: None,
            };
            assert!(service.submit_complaint(req).await);
        }

        let complaints = service.list_complaints().await;
        assert_eq!(complaints[0].id, 1);
        assert_eq!(complaints[0].description, "first");
        assert_eq!(complaints[1].id, 2);
        assert_eq!(complaints[1].description, "second");
    }

    #[tokio::test]
    async fn status_like_payload_fields_are_discarded() {
        let (service, _dir) = test_service();
        let req: SubmitComplaintRequest = serde_json::from_value(serde_json::json!({
            "description": "stalker report",
            "status": "resolved",
            "timestamp": "1999-01-01T00:00:00"
        }))
        .unwrap();

        assert!(service.submit_complaint(req).await);

        let complaints = service.list_complaints().await;
        assert_eq!(complaints[0].status, STATUS_PENDING);
        assert_ne!(complaints[0].timestamp, "1999-01-01T00:00:00");
    }
}
