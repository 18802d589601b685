use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::{ClientError, RequestState, TranscriptionClient, UploadSelection};

pub const NO_FILE_SELECTED_MESSAGE: &str = "No file selected.";

/// Holds the user's current file choice and gates submissions so only one
/// upload runs at a time.
pub struct UploadController {
    client: Arc<TranscriptionClient>,
    selection: RwLock<Option<UploadSelection>>,
    submitting: AtomicBool,
}

impl UploadController {
    pub fn new(client: Arc<TranscriptionClient>) -> Self {
        Self {
            client,
            selection: RwLock::new(None),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn client(&self) -> &Arc<TranscriptionClient> {
        &self.client
    }

    /// Replaces any previous selection.
    pub fn select_file(&self, selection: UploadSelection) -> UploadSelection {
        tracing::debug!(
            file_name = selection.name(),
            size = %selection.size_label(),
            "file selected"
        );
        let mut current = self
            .selection
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Some(selection.clone());
        selection
    }

    pub fn selection(&self) -> Option<UploadSelection> {
        self.selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Whether a submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.selection().is_some()
    }

    /// Uploads the current selection. Without a selection the client state
    /// becomes a validation failure and nothing is sent.
    pub async fn submit(&self) -> Result<RequestState, ClientError> {
        let Some(selection) = self.selection() else {
            tracing::warn!("submit requested without a selected file");
            return Ok(self.client.reject(NO_FILE_SELECTED_MESSAGE));
        };

        let _submitting = SubmittingFlag::acquire(&self.submitting)?;
        Ok(self.client.upload(&selection).await)
    }
}

struct SubmittingFlag<'a>(&'a AtomicBool);

impl<'a> SubmittingFlag<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ClientError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ClientError::SubmissionInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for SubmittingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
