use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use relay_application::{TranscribeAudioRequest, TranscribeAudioResponse, UploadedFile};

use crate::error::{error_mapper, HttpError};
use crate::AppState;

const FILE_FIELD: &str = "file";

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn transcribe_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<TranscribeAudioResponse>), HttpError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "rejected transcribe request body");
        HttpError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    })?;
    let request = read_upload(multipart).await?;

    match &request.file {
        Some(file) => tracing::info!(
            file_name = %file.file_name,
            size_bytes = file.content.len(),
            "received transcribe request"
        ),
        None => tracing::info!("received transcribe request without file"),
    }

    match state.relay.transcribe(request).await {
        Ok(result) => {
            tracing::info!(
                text_len = result.transcription.len(),
                "transcribe request completed"
            );
            Ok((StatusCode::OK, Json(result)))
        }
        Err(error) => {
            tracing::error!(error = %error, "transcribe request failed");
            Err(error_mapper(error))
        }
    }
}

/// Takes the first `file` field that carries a filename; other fields are
/// skipped.
async fn read_upload(mut multipart: Multipart) -> Result<TranscribeAudioRequest, HttpError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let content = field.bytes().await.map_err(multipart_error)?.to_vec();

        return Ok(TranscribeAudioRequest {
            file: Some(UploadedFile {
                file_name,
                content_type,
                content,
            }),
        });
    }
    Ok(TranscribeAudioRequest::default())
}

fn multipart_error(error: MultipartError) -> HttpError {
    tracing::warn!(error = %error, "failed to read multipart body");
    HttpError::Rejected {
        status: error.status(),
        message: error.body_text(),
    }
}
