use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::{RequestState, TransportResponse, UploadSelection, UploadTransport};

pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Received an unexpected response from the server.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";
pub const CANCELLED_MESSAGE: &str = "Upload was cancelled.";

/// Owns the [`RequestState`] of the upload session and publishes every change
/// to subscribers.
pub struct TranscriptionClient {
    transport: Arc<dyn UploadTransport>,
    state: watch::Sender<RequestState>,
}

impl TranscriptionClient {
    pub fn new(transport: Arc<dyn UploadTransport>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self { transport, state }
    }

    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    pub async fn upload(&self, selection: &UploadSelection) -> RequestState {
        let in_flight = InFlight::begin(&self.state);
        tracing::info!(
            file_name = selection.name(),
            size_bytes = selection.size_bytes(),
            "uploading file for transcription"
        );

        let terminal = match self.transport.send(selection).await {
            Ok(response) => {
                tracing::debug!(status = response.status, "relay responded");
                interpret_response(&response)
            }
            Err(err) => {
                tracing::warn!(error = %err, "upload failed before a response arrived");
                RequestState::failed(err.to_string())
            }
        };

        in_flight.settle(terminal)
    }

    /// Records a failure that happened before any request was made.
    pub(crate) fn reject(&self, message: &str) -> RequestState {
        let state = RequestState::failed(message);
        self.state.send_replace(state.clone());
        state
    }
}

/// Holds the state at `InFlight` until settled. Dropping it unsettled (the
/// upload future was cancelled) records a cancellation failure.
struct InFlight<'a> {
    state: &'a watch::Sender<RequestState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a watch::Sender<RequestState>) -> Self {
        state.send_replace(RequestState::InFlight);
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, terminal: RequestState) -> RequestState {
        self.settled = true;
        self.state.send_replace(terminal.clone());
        terminal
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state
                .send_replace(RequestState::failed(CANCELLED_MESSAGE));
        }
    }
}

fn interpret_response(response: &TransportResponse) -> RequestState {
    let parsed = serde_json::from_slice::<Value>(&response.body).ok();

    if !response.is_success() {
        let fallback = || match response.status_text.as_str() {
            "" => UNKNOWN_ERROR_MESSAGE.to_string(),
            text => format!("Server error: {text}"),
        };
        let message = parsed
            .as_ref()
            .and_then(error_field)
            .map_or_else(fallback, str::to_string);
        return RequestState::failed(message);
    }

    let Some(body) = parsed else {
        return RequestState::failed(UNEXPECTED_RESPONSE_MESSAGE);
    };
    if let Some(transcription) = body.get("transcription").and_then(Value::as_str) {
        return RequestState::Succeeded {
            transcription: transcription.to_string(),
        };
    }
    match body.get("error").and_then(Value::as_str) {
        Some(error) => RequestState::failed(error),
        None => RequestState::failed(UNEXPECTED_RESPONSE_MESSAGE),
    }
}

fn error_field(body: &Value) -> Option<&str> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|message| !message.is_empty())
}
