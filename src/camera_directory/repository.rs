//! CameraDirectory Repository
//!
//! Database access layer for the camera table

use super::types::*;
use crate::error::Result;
use sqlx::MySqlPool;

/// Camera repository for database operations
#[derive(Clone)]
pub struct CameraRepository {
    pool: MySqlPool,
}

impl CameraRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Camera SELECT columns
    const CAMERA_COLUMNS: &'static str = r#"
        id, name, model_no, brand, ip_address, link,
        lat, lon, cam_username, cam_password, image_link, status
    "#;

    /// Get all cameras
    pub async fn get_all_cameras(&self) -> Result<Vec<Camera>> {
        let query = format!("SELECT {} FROM cameras ORDER BY id", Self::CAMERA_COLUMNS);
        let cameras = sqlx::query_as::<_, Camera>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(cameras)
    }

    /// Get active cameras (status = 'A')
    pub async fn get_active_cameras(&self) -> Result<Vec<Camera>> {
        let query = format!(
            "SELECT {} FROM cameras WHERE status = ? ORDER BY id",
            Self::CAMERA_COLUMNS
        );
        let cameras = sqlx::query_as::<_, Camera>(&query)
            .bind(STATUS_ACTIVE)
            .fetch_all(&self.pool)
            .await?;

        Ok(cameras)
    }

    /// Insert camera with server-defaulted active status
    pub async fn insert_camera(&self, req: &CreateCameraRequest, link: &str) -> Result<Camera> {
        let result = sqlx::query(
            r#"
            INSERT INTO cameras (
                name, model_no, brand, ip_address, link,
                lat, lon, cam_username, cam_password, image_link, status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.name)
        .bind(&req.model_no)
        .bind(&req.brand)
        .bind(&req.ip_address)
        .bind(link)
        .bind(&req.lat)
        .bind(&req.lon)
        .bind(&req.cam_username)
        .bind(&req.cam_password)
        .bind(&req.image_link)
        .bind(STATUS_ACTIVE)
        .execute(&self.pool)
        .await?;

        let query = format!("SELECT {} FROM cameras WHERE id = ?", Self::CAMERA_COLUMNS);
        let camera = sqlx::query_as::<_, Camera>(&query)
            .bind(result.last_insert_id())
            .fetch_one(&self.pool)
            .await?;

        Ok(camera)
    }

    /// Deactivate every camera that is not already deactivated
    pub async fn deactivate_all(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE cameras SET status = ? WHERE status <> ?")
            .bind(STATUS_DEACTIVATED)
            .bind(STATUS_DEACTIVATED)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
