//! CameraDirectory data types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Active camera status
pub const STATUS_ACTIVE: &str = "A";
/// Deactivated camera status
pub const STATUS_DEACTIVATED: &str = "X";

/// Camera row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Camera {
    pub id: i64,
    pub name: String,
    pub model_no: String,
    pub brand: String,
    pub ip_address: String,
    /// Stream URL, derived from the IP address when not supplied
    pub link: String,
    pub lat: String,
    pub lon: String,
    pub cam_username: String,
    pub cam_password: String,
    pub image_link: String,
    /// "A" = active, "X" = deactivated
    pub status: String,
}

/// Camera registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCameraRequest {
    pub name: String,
    pub model_no: String,
    pub brand: String,
    pub ip_address: String,
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub cam_username: String,
    #[serde(default)]
    pub cam_password: String,
    #[serde(default)]
    pub image_link: String,
    /// Defaulted to http://{ip_address}/video when absent or empty
    pub link: Option<String>,
}
