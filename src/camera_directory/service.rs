//! CameraDirectory Service
//!
//! Business logic layer for the camera inventory

use super::repository::CameraRepository;
use super::types::*;
use crate::error::Result;

/// CameraDirectory service for business logic
pub struct CameraDirectoryService {
    repo: CameraRepository,
}

impl CameraDirectoryService {
    /// Create new service
    pub fn new(repo: CameraRepository) -> Self {
        Self { repo }
    }

    /// List all cameras
    pub async fn list_all(&self) -> Result<Vec<Camera>> {
        self.repo.get_all_cameras().await
    }

    /// List active cameras
    pub async fn list_active(&self) -> Result<Vec<Camera>> {
        self.repo.get_active_cameras().await
    }

    /// Register a camera
    ///
    /// Status is always "A" on insert; the stream link falls back to the
    /// derived form when the caller gave none.
    pub async fn add_camera(&self, req: CreateCameraRequest) -> Result<Camera> {
        if req.name.is_empty() {
            return Err(crate::Error::Validation("name must not be empty".to_string()));
        }
        if req.ip_address.is_empty() {
            return Err(crate::Error::Validation(
                "ip_address must not be empty".to_string(),
            ));
        }

        let link = effective_link(req.link.as_deref(), &req.ip_address);
        self.repo.insert_camera(&req, &link).await
    }

    /// Deactivate all cameras, returning how many rows were flipped
    pub async fn deactivate_all(&self) -> Result<u64> {
        self.repo.deactivate_all().await
    }
}

/// Stream link to store: the caller's, unless absent or empty
fn effective_link(link: Option<&str>, ip_address: &str) -> String {
    match link {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => format!("http://{}/video", ip_address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_derived_from_ip_when_absent() {
        assert_eq!(
            effective_link(None, "192.168.1.50"),
            "http://192.168.1.50/video"
        );
    }

    #[test]
    fn empty_link_falls_back_to_derived_form() {
        assert_eq!(
            effective_link(Some(""), "192.168.1.50"),
            "http://192.168.1.50/video"
        );
    }

    #[test]
    fn explicit_link_is_kept() {
        assert_eq!(
            effective_link(Some("rtsp://cam/stream"), "192.168.1.50"),
            "rtsp://cam/stream"
        );
    }
}
