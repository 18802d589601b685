use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to reach the transcription service: {0}")]
    Network(String),

    #[error("The transcription request timed out.")]
    Timeout,

    #[error("A submission is already in progress.")]
    SubmissionInProgress,

    #[error("Could not read `{path}`: {message}")]
    File { path: String, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
