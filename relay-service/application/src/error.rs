use thiserror::Error;

use relay_domain::DomainError;

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
pub const MISSING_FILE_NAME_MESSAGE: &str = "Uploaded file has no name.";
pub const UNEXPECTED_SHAPE_MESSAGE: &str =
    "Unexpected response structure from transcription service.";
pub const TRANSPORT_MESSAGE: &str = "Transcription service is unavailable.";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend could not be reached or did not answer in time.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered 2xx with a body none of the known shapes match.
    #[error("{}", UNEXPECTED_SHAPE_MESSAGE)]
    UnexpectedShape,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn backend(status: u16, status_text: &str, body: &str) -> Self {
        Self::Backend {
            status,
            message: format!("Error from transcription service: {status_text} - {body}"),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Timeout { .. } | DomainError::Unreachable { .. } => {
                ApplicationError::Transport(error.to_string())
            }
            DomainError::MalformedBody { .. } => ApplicationError::UnexpectedShape,
            DomainError::Internal { message } => ApplicationError::Internal(message),
        }
    }
}
