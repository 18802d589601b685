use std::sync::Arc;

use anyhow::{anyhow, Error};
use axum::Router;
use relay_application::{RelayUseCase, RelayUseCaseImpl};
use relay_configuration::{AppConfig, ServerConfig};
use relay_domain::TranscriptionBackendPort;
use relay_http_server::{build_router, create_app_routes, AppState};
use relay_infra_backend::{RestBackendConfig, RestTranscriptionBackend};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        let backend_config = &config.service.backend;
        tracing::info!(
            backend_url = %backend_config.url,
            request_timeout_ms = backend_config.request_timeout_ms,
            max_upload_bytes = config.service.upload.max_upload_bytes,
            "initializing transcription relay"
        );

        let backend: Arc<dyn TranscriptionBackendPort> =
            Arc::new(RestTranscriptionBackend::new(RestBackendConfig {
                endpoint_url: backend_config.url.clone(),
                connect_timeout: backend_config.connect_timeout(),
                request_timeout: backend_config.request_timeout(),
            })?);
        Ok(Self::with_backend(config, backend))
    }

    /// Wires the relay around an already-built backend port.
    pub fn with_backend(config: AppConfig, backend: Arc<dyn TranscriptionBackendPort>) -> Self {
        let relay: Arc<dyn RelayUseCase> = Arc::new(RelayUseCaseImpl::new(backend));
        Self {
            config,
            state: AppState::new(relay),
        }
    }

    pub fn router(&self) -> Router {
        build_router(
            self.state.clone(),
            self.config.service.upload.max_upload_bytes,
        )
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting transcription relay http server"
        );

        create_app_routes(
            self.state,
            self.config.service.upload.max_upload_bytes,
            server_config,
        )
        .await
        .map_err(|err| anyhow!("relay http server failed: {err}"))
    }
}
