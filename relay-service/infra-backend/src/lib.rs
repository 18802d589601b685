use std::time::Duration;

use async_trait::async_trait;
use relay_domain::{AudioUpload, BackendReply, DomainError, TranscriptionBackendPort};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

const SERVICE: &str = "transcription backend";
const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct RestBackendConfig {
    pub endpoint_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

/// Forwards uploads to an HTTP transcription backend as `multipart/form-data`.
pub struct RestTranscriptionBackend {
    client: Client,
    endpoint_url: String,
}

impl RestTranscriptionBackend {
    pub fn new(config: RestBackendConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                DomainError::internal_error(&format!("failed to build backend client: {err}"))
            })?;
        Ok(Self {
            client,
            endpoint_url: config.endpoint_url,
        })
    }
}

#[async_trait]
impl TranscriptionBackendPort for RestTranscriptionBackend {
    async fn submit(&self, upload: AudioUpload) -> Result<BackendReply, DomainError> {
        tracing::info!(
            endpoint = %self.endpoint_url,
            file_name = %upload.file_name,
            size_bytes = upload.size_bytes(),
            "forwarding file to transcription backend"
        );

        let form = build_form(upload)?;
        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "transcription backend responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                tracing::warn!(error = %err, "could not read backend error body");
                String::new()
            });
            return Ok(BackendReply::Failure {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(map_request_error)?;
        let body = serde_json::from_slice(&bytes)
            .map_err(|err| DomainError::malformed_body(SERVICE, &err.to_string()))?;
        Ok(BackendReply::Success(body))
    }
}

fn build_form(upload: AudioUpload) -> Result<Form, DomainError> {
    let AudioUpload {
        file_name,
        content_type,
        content,
    } = upload;

    let mut part = Part::bytes(content).file_name(file_name);
    if let Some(content_type) = content_type {
        part = part.mime_str(&content_type).map_err(|err| {
            DomainError::internal_error(&format!("invalid content type `{content_type}`: {err}"))
        })?;
    }
    Ok(Form::new().part(FILE_FIELD, part))
}

fn map_request_error(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::timeout(SERVICE)
    } else {
        DomainError::unreachable(SERVICE, &err.to_string())
    }
}
