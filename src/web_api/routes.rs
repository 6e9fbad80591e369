//! API Routes

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::alert_log::{CreateAlertRequest, MarkReadRequest};
use crate::camera_directory::CreateCameraRequest;
use crate::complaint_log::SubmitComplaintRequest;
use crate::models::{ApiError, ApiResponse};
use crate::state::AppState;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(super::health_check))
        // Alerts
        .route("/api/alerts", get(list_alerts))
        .route("/api/alerts/create", post(create_alert))
        .route("/api/alerts/read", post(mark_alert_read))
        // Complaints
        .route("/api/alerts/complaint", post(submit_complaint))
        .route("/api/alerts/get-complaints", get(list_complaints))
        // Cameras
        .route("/api/cameras", get(list_cameras))
        .route("/api/cameras", post(add_camera))
        .route("/api/cameras/active", get(list_active_cameras))
        .route("/api/cameras/deactivate", post(deactivate_cameras))
        .with_state(state)
}

// ========================================
// Alert Handlers
// ========================================

async fn list_alerts(State(state): State<AppState>) -> impl IntoResponse {
    let alerts = state.alert_log.list_alerts().await;
    Json(ApiResponse::success(alerts))
}

async fn create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> impl IntoResponse {
    if state.alert_log.create_alert(req).await {
        Json(ApiResponse::success("Alert created successfully".to_string())).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<String>::error(ApiError {
                code: "ALERT_CREATE_FAILED".to_string(),
                message: "Failed to create alert".to_string(),
            })),
        )
            .into_response()
    }
}

async fn mark_alert_read(
    State(state): State<AppState>,
    Json(req): Json<MarkReadRequest>,
) -> impl IntoResponse {
    state.alert_log.mark_read(req.id).await;
    Json(ApiResponse::success("Updated successfully".to_string()))
}

// ========================================
// Complaint Handlers
// ========================================

async fn submit_complaint(
    State(state): State<AppState>,
    Json(req): Json<SubmitComplaintRequest>,
) -> impl IntoResponse {
    if state.complaint_log.submit_complaint(req).await {
        Json(ApiResponse::success("Complaint recorded".to_string())).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<String>::error(ApiError {
                code: "COMPLAINT_SUBMIT_FAILED".to_string(),
                message: "Failed to record complaint".to_string(),
            })),
        )
            .into_response()
    }
}

async fn list_complaints(State(state): State<AppState>) -> impl IntoResponse {
    let complaints = state.complaint_log.list_complaints().await;
    Json(ApiResponse::success(complaints))
}

// ========================================
// Camera Handlers
// ========================================

async fn list_cameras(State(state): State<AppState>) -> impl IntoResponse {
    match state.camera_directory.list_all().await {
        Ok(cameras) => Json(ApiResponse::success(cameras)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn list_active_cameras(State(state): State<AppState>) -> impl IntoResponse {
    match state.camera_directory.list_active().await {
        Ok(cameras) => Json(ApiResponse::success(cameras)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn add_camera(
    State(state): State<AppState>,
    Json(req): Json<CreateCameraRequest>,
) -> impl IntoResponse {
    match state.camera_directory.add_camera(req).await {
        Ok(camera) => (StatusCode::CREATED, Json(ApiResponse::success(camera))).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn deactivate_cameras(State(state): State<AppState>) -> impl IntoResponse {
    match state.camera_directory.deactivate_all().await {
        Ok(count) => Json(ApiResponse::success(count)).into_response(),
        Err(e) => e.into_response(),
    }
}
