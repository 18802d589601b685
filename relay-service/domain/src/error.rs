use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{service} request timed out")]
    Timeout { service: String },

    #[error("{service} is unreachable: {message}")]
    Unreachable { service: String, message: String },

    #[error("{service} returned an unreadable body: {message}")]
    MalformedBody { service: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn timeout(service: &str) -> Self {
        Self::Timeout {
            service: service.to_string(),
        }
    }

    pub fn unreachable(service: &str, message: &str) -> Self {
        Self::Unreachable {
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    pub fn malformed_body(service: &str, message: &str) -> Self {
        Self::MalformedBody {
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Whether the backend could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Unreachable { .. })
    }
}
