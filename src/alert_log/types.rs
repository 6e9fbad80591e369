//! Alert data types

use serde::{Deserialize, Serialize};

/// Alert record
///
/// Identifiers are 1-based, assigned at insert time, and stable for the
/// record's lifetime. `read_status` only ever transitions 0 to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    /// Short category, e.g. "gesture"
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    /// Origin label, "System" when the caller gave none
    pub source: String,
    /// Optional coordinate/context payload
    pub location: Option<serde_json::Value>,
    /// RFC3339 timestamp; older documents may lack it, which sorts last
    #[serde(default)]
    pub timestamp: String,
    /// 0 = unread, 1 = read
    pub read_status: i32,
}

/// Alert creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub source: Option<String>,
    pub location: Option<serde_json::Value>,
    /// Server-assigned when absent
    pub timestamp: Option<String>,
}

/// Read-status update request
#[derive(Debug, Clone, Deserialize)]
pub struct MarkReadRequest {
    pub id: u64,
}
