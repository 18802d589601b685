pub mod client;
pub mod controller;
pub mod error;
pub mod selection;
pub mod state;
pub mod transport;
pub mod view;

pub use client::TranscriptionClient;
pub use controller::UploadController;
pub use error::ClientError;
pub use selection::UploadSelection;
pub use state::RequestState;
pub use transport::{HttpTransport, TransportResponse, UploadTransport};
pub use view::{render, Rendering};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/transcribe";
