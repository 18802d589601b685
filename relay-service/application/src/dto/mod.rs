mod transcribe;

pub use transcribe::{TranscribeAudioRequest, TranscribeAudioResponse, UploadedFile};
