mod health;
mod transcribe;

pub use health::health_check;
pub use transcribe::transcribe_audio;
