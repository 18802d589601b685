use serde::Serialize;
use validator::Validate;

use relay_domain::AudioUpload;

/// Inbound relay request. `file` is `None` when the multipart body carried no
/// `file` field.
#[derive(Debug, Clone, Default)]
pub struct TranscribeAudioRequest {
    pub file: Option<UploadedFile>,
}

#[derive(Debug, Clone, Validate)]
pub struct UploadedFile {
    #[validate(length(min = 1))]
    pub file_name: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

impl From<UploadedFile> for AudioUpload {
    fn from(file: UploadedFile) -> Self {
        Self {
            file_name: file.file_name,
            content_type: file.content_type.filter(|value| !value.is_empty()),
            content: file.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscribeAudioResponse {
    pub transcription: String,
}
