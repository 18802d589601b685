use serde_json::Value;

/// An audio file received from the upload client, kept as raw bytes so it can
/// be re-encoded for the backend without alteration.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

impl AudioUpload {
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}

/// Raw outcome of a backend call that reached the backend and got an answer.
#[derive(Debug, Clone)]
pub enum BackendReply {
    Success(Value),
    Failure {
        status: u16,
        status_text: String,
        body: String,
    },
}
