//! CameraDirectory - Camera Inventory
//!
//! ## Responsibilities
//!
//! - CRUD over the camera table in MySQL
//! - Server-side defaults on registration (status, derived stream link)
//! - Bulk deactivation for maintenance windows
//!
//! ## Design Principles
//!
//! - External collaborator: availability is best-effort, errors are
//!   logged by the caller and never retried here
//! - Unrelated to the RecordStore; no camera data touches the JSON store

mod repository;
mod service;
mod types;

pub use repository::CameraRepository;
pub use service::CameraDirectoryService;
pub use types::*;
