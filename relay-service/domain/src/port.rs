use async_trait::async_trait;

use crate::{AudioUpload, BackendReply, DomainError};

#[async_trait]
pub trait TranscriptionBackendPort: Send + Sync {
    /// Sends the upload to the backend. A reply with a non-success status is
    /// still `Ok`; `Err` means no usable reply was obtained.
    async fn submit(&self, upload: AudioUpload) -> Result<BackendReply, DomainError>;
}
