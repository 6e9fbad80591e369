//! AlertLogService
//!
//! Business logic for alert recording and the alert feed

use super::types::{Alert, CreateAlertRequest};
use crate::record_store::{RecordKind, RecordStore};
use chrono::Utc;
use std::sync::Arc;

/// Default origin label for alerts created without a source
const DEFAULT_SOURCE: &str = "System";

/// AlertLogService instance
pub struct AlertLogService {
    store: Arc<RecordStore>,
}

impl AlertLogService {
    /// Create new AlertLogService
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// List all alerts, newest first
    ///
    /// Sorted by the raw timestamp string descending; records without a
    /// timestamp sort last. Insertion order is preserved among ties.
    pub async fn list_alerts(&self) -> Vec<Alert> {
        match self.store.load::<Alert>(RecordKind::Alerts).await {
            Ok(mut alerts) => {
                alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                alerts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load alerts");
                Vec::new()
            }
        }
    }

    /// Record a new alert
    ///
    /// Assigns the next identifier, stamps the current time unless the
    /// caller supplied one, and persists the collection. Returns whether
    /// the persist succeeded; failures are logged, never raised.
    pub async fn create_alert(&self, req: CreateAlertRequest) -> bool {
        let result = self
            .store
            .update::<Alert, _>(RecordKind::Alerts, |alerts| {
                let alert = Alert {
                    id: alerts.len() as u64 + 1,
                    alert_type: req.alert_type,
                    message: req.message,
                    source: req.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
                    location: req.location,
                    timestamp: req.timestamp.unwrap_or_else(|| Utc::now().to_rfc3339()),
                    read_status: 0,
                };
                tracing::info!(
                    id = alert.id,
                    alert_type = %alert.alert_type,
                    source = %alert.source,
                    "Alert recorded"
                );
                alerts.push(alert);
            })
            .await;

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist alert");
                false
            }
        }
    }

    /// Mark an alert as read
    ///
    /// Updates every record with a matching id and persists
    /// unconditionally. An unknown id is a no-op, not an error.
    pub async fn mark_read(&self, id: u64) {
        let result = self
            .store
            .update::<Alert, _>(RecordKind::Alerts, |alerts| {
                for alert in alerts.iter_mut().filter(|a| a.id == id) {
                    alert.read_status = 1;
                }
            })
            .await;

        if let Err(e) = result {
            tracing::error!(error = %e, id, "Failed to update alert read status");
        }
    }
}
