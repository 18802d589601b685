use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use relay_application::RelayUseCase;
use relay_configuration::ServerConfig;
use tokio::net::TcpListener;

pub mod error;
pub mod handlers;

pub use error::{error_mapper, HttpError};
pub use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn RelayUseCase>,
}

impl AppState {
    pub fn new(relay: Arc<dyn RelayUseCase>) -> Self {
        Self { relay }
    }
}

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    // The multipart extractor is the only reader of the upload body.
    let transcribe_route = post(transcribe_audio)
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/transcribe", transcribe_route)
        .with_state(state)
}

pub async fn create_app_routes(
    state: AppState,
    max_upload_bytes: usize,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    serve(listener, build_router(state, max_upload_bytes)).await
}

pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    tracing::info!(address = %listener.local_addr()?, "relay http server listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
