use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_application::{ApplicationError, TRANSPORT_MESSAGE, UNEXPECTED_SHAPE_MESSAGE};
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    /// The transcription backend answered with an error status.
    Upstream {
        status: StatusCode,
        message: String,
    },
    /// The inbound body could not be read as multipart.
    Rejected {
        status: StatusCode,
        message: String,
    },
    Internal { message: String },
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::Validation { .. } => StatusCode::BAD_REQUEST,
            HttpError::Upstream { status, .. } | HttpError::Rejected { status, .. } => *status,
            HttpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::Validation { message }
            | HttpError::Upstream { message, .. }
            | HttpError::Rejected { message, .. }
            | HttpError::Internal { message } => message,
        };

        (
            status,
            Json(json!({
                "message": message,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Validation(message) => HttpError::Validation { message },
        ApplicationError::Backend { status, message } => HttpError::Upstream {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message,
        },
        ApplicationError::Transport(_) => HttpError::Internal {
            message: TRANSPORT_MESSAGE.to_string(),
        },
        ApplicationError::UnexpectedShape => HttpError::Internal {
            message: UNEXPECTED_SHAPE_MESSAGE.to_string(),
        },
        ApplicationError::Internal(message) => HttpError::Internal { message },
    }
}
