use std::fmt;

use crate::RequestState;

/// What the result area shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering<'a> {
    Loading,
    Error(&'a str),
    Transcription(&'a str),
    Nothing,
}

pub fn render(state: &RequestState) -> Rendering<'_> {
    match state {
        RequestState::Idle => Rendering::Nothing,
        RequestState::InFlight => Rendering::Loading,
        RequestState::Succeeded { transcription } => Rendering::Transcription(transcription),
        RequestState::Failed { message } => Rendering::Error(message),
    }
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendering::Loading => write!(f, "Processing audio..."),
            Rendering::Error(message) => write!(f, "Error: {message}"),
            Rendering::Transcription(text) => write!(f, "Transcription Result:\n{text}"),
            Rendering::Nothing => Ok(()),
        }
    }
}
