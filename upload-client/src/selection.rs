use std::path::Path;
use std::sync::Arc;

use crate::ClientError;

/// A file chosen by the user. Immutable once built; a new choice replaces it.
#[derive(Debug, Clone)]
pub struct UploadSelection {
    name: String,
    content_type: Option<String>,
    content: Arc<[u8]>,
}

impl UploadSelection {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = guess_content_type(&name).map(str::to_string);
        Self {
            name,
            content_type,
            content: content.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let file_error = |message: String| ClientError::File {
            path: path.display().to_string(),
            message,
        };
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| file_error("path has no file name".to_string()))?
            .to_string();
        let content = tokio::fs::read(path)
            .await
            .map_err(|err| file_error(err.to_string()))?;
        Ok(Self::new(name, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }

    /// Size in kilobytes with two decimals, e.g. `"1.50 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes() as f64 / 1024.0)
    }
}

fn guess_content_type(name: &str) -> Option<&'static str> {
    let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "ogg" => Some("audio/ogg"),
        "m4a" | "mp4" => Some("audio/mp4"),
        _ => None,
    }
}
