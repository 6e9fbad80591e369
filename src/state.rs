//! Application state
//!
//! Holds all shared components and state

use crate::alert_log::AlertLogService;
use crate::camera_directory::CameraDirectoryService;
use crate::complaint_log::ComplaintLogService;
use sqlx::MySqlPool;
use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database URL (camera directory)
    pub database_url: String,
    /// Record store root directory (alerts/complaints JSON documents)
    pub data_dir: PathBuf,
    /// Server port
    pub port: u16,
    /// Server host
    pub host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "mysql://root@localhost/vigil".to_string()),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database pool (camera directory)
    pub pool: MySqlPool,
    /// Application config
    pub config: AppConfig,
    /// AlertLogService (file-backed alert records)
    pub alert_log: Arc<AlertLogService>,
    /// ComplaintLogService (file-backed complaint records)
    pub complaint_log: Arc<ComplaintLogService>,
    /// CameraDirectoryService (camera inventory in MySQL)
    pub camera_directory: Arc<CameraDirectoryService>,
}
