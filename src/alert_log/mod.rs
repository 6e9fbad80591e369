//! AlertLogService - Alert Recording
//!
//! ## Responsibilities
//!
//! - Record alerts raised by gesture detection and other sources
//! - Serve the alert feed sorted newest-first
//! - Track per-alert read status
//!
//! ## Design Principles
//!
//! - Operations are total: failures are logged and absorbed, never raised
//! - All persistence goes through the RecordStore

mod service;
mod types;

pub use service::AlertLogService;
pub use types::*;
