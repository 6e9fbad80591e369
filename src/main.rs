//! Vigil Alert Server
//!
//! Main entry point for the alert server application.

use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vigil_server::{
    alert_log::AlertLogService,
    camera_directory::{CameraDirectoryService, CameraRepository},
    complaint_log::ComplaintLogService,
    record_store::RecordStore,
    state::{AppConfig, AppState},
    web_api,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vigil alert server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::default();
    tracing::info!(
        database_url = %config.database_url,
        data_dir = %config.data_dir.display(),
        "Configuration loaded"
    );

    // Create database pool (camera directory)
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected");

    // Initialize components
    let store = Arc::new(RecordStore::new(config.data_dir.clone()));
    let alert_log = Arc::new(AlertLogService::new(store.clone()));
    let complaint_log = Arc::new(ComplaintLogService::new(store));
    tracing::info!("Record store services initialized (AlertLogService, ComplaintLogService)");

    let camera_directory = Arc::new(CameraDirectoryService::new(CameraRepository::new(
        pool.clone(),
    )));
    tracing::info!("CameraDirectoryService initialized");

    // Create application state
    let state = AppState {
        pool,
        config,
        alert_log,
        complaint_log,
        camera_directory,
    };

    // Create router
    let app = web_api::create_router(state.clone())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
