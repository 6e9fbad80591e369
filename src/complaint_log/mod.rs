//! ComplaintLogService - Citizen Complaint Intake
//!
//! ## Responsibilities
//!
//! - Record complaint submissions with server-assigned fields
//! - Serve the complaint list in submission order
//!
//! ## Design Principles
//!
//! - Operations are total: failures are logged and absorbed, never raised
//! - All persistence goes through the RecordStore

mod service;
mod types;

pub use service::ComplaintLogService;
pub use types::*;
