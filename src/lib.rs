//! Vigil Alert Server
//!
//! Record-keeping backend for camera monitoring deployments.
//!
//! ## Components
//!
//! 1. RecordStore - File-backed collection persistence (alerts, complaints)
//! 2. AlertLogService - Alert recording, listing, read-status tracking
//! 3. ComplaintLogService - Citizen complaint intake
//! 4. CameraDirectory - Camera inventory in MySQL (external collaborator)
//! 5. WebAPI - REST API endpoints
//!
//! ## Design Principles
//!
//! - RecordStore is the only writer of the on-disk collections
//! - Alert/complaint operations never raise past the service boundary
//! - Load-mutate-save sequences are serialized per entity kind

pub mod alert_log;
pub mod camera_directory;
pub mod complaint_log;
pub mod error;
pub mod models;
pub mod record_store;
pub mod state;
pub mod web_api;

pub use error::{Error, Result};
pub use state::AppState;
