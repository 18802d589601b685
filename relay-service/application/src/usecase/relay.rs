use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use relay_domain::{AudioUpload, BackendReply, TranscriptionBackendPort};

use crate::error::{MISSING_FILE_NAME_MESSAGE, NO_FILE_MESSAGE};
use crate::{
    normalize_backend_response, ApplicationError, TranscribeAudioRequest, TranscribeAudioResponse,
};

#[async_trait]
pub trait RelayUseCase: Send + Sync {
    async fn transcribe(
        &self,
        request: TranscribeAudioRequest,
    ) -> Result<TranscribeAudioResponse, ApplicationError>;
}

pub struct RelayUseCaseImpl {
    backend: Arc<dyn TranscriptionBackendPort>,
}

impl RelayUseCaseImpl {
    pub fn new(backend: Arc<dyn TranscriptionBackendPort>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl RelayUseCase for RelayUseCaseImpl {
    async fn transcribe(
        &self,
        request: TranscribeAudioRequest,
    ) -> Result<TranscribeAudioResponse, ApplicationError> {
        let file = request
            .file
            .ok_or_else(|| ApplicationError::Validation(NO_FILE_MESSAGE.to_string()))?;
        file.validate()
            .map_err(|_| ApplicationError::Validation(MISSING_FILE_NAME_MESSAGE.to_string()))?;

        let upload = AudioUpload::from(file);
        tracing::debug!(
            file_name = %upload.file_name,
            size_bytes = upload.size_bytes(),
            content_type = upload.content_type.as_deref().unwrap_or("unknown"),
            "forwarding upload to transcription backend"
        );

        match self.backend.submit(upload).await? {
            BackendReply::Failure {
                status,
                status_text,
                body,
            } => {
                tracing::warn!(status, body = %body, "transcription backend returned an error");
                Err(ApplicationError::backend(status, &status_text, &body))
            }
            BackendReply::Success(body) => match normalize_backend_response(&body) {
                Some(matched) => {
                    tracing::debug!(
                        shape = matched.shape,
                        text_len = matched.text.len(),
                        "normalized backend response"
                    );
                    Ok(TranscribeAudioResponse {
                        transcription: matched.text,
                    })
                }
                None => {
                    tracing::warn!(payload = %body, "unrecognized backend response structure");
                    Err(ApplicationError::UnexpectedShape)
                }
            },
        }
    }
}
