//! Complaint data types

use serde::{Deserialize, Serialize};

/// Status assigned to every new complaint; no transition path exists yet
pub const STATUS_PENDING: &str = "pending";

/// Complaint record
///
/// Identifier space is independent from alerts. Records are never
/// mutated or deleted after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: u64,
    pub description: String,
    pub proof_link: String,
    /// RFC3339 timestamp, always server-assigned
    pub timestamp: String,
    pub status: String,
}

/// Complaint submission request
///
/// Carries only the caller-controlled fields; timestamp and status are
/// server-assigned, so anything status-like in the payload is dropped
/// during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitComplaintRequest {
    pub description: Option<String>,
    pub proof_link: Option<String>,
}
