use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use upload_client::{
    render, HttpTransport, RequestState, TranscriptionClient, UploadController, UploadSelection,
    DEFAULT_ENDPOINT,
};

/// Upload an audio file to the transcription relay and print the result.
#[derive(Debug, Parser)]
#[command(name = "transcribe", version)]
struct Cli {
    /// Audio file to transcribe (wav, mp3, ogg, m4a).
    file: PathBuf,

    /// Relay endpoint receiving the upload.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// MIME type to send instead of the one guessed from the extension.
    #[arg(long)]
    content_type: Option<String>,

    /// Give up after this many seconds.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    let cli = Cli::parse();

    let transport = HttpTransport::new(cli.endpoint, Duration::from_secs(cli.timeout_secs.max(1)))?;
    let client = Arc::new(TranscriptionClient::new(Arc::new(transport)));
    let controller = UploadController::new(client.clone());

    let mut selection = UploadSelection::from_path(&cli.file).await?;
    if let Some(content_type) = cli.content_type {
        selection = selection.with_content_type(content_type);
    }
    let selection = controller.select_file(selection);
    eprintln!("File: {} ({})", selection.name(), selection.size_label());

    let mut updates = client.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            if state.is_in_flight() {
                eprintln!("{}", render(&state));
            }
        }
    });

    let state = controller.submit().await?;
    drop(controller);
    drop(client);
    if let Err(err) = printer.await {
        tracing::warn!(error = %err, "state printer task failed");
    }

    println!("{}", render(&state));
    if let RequestState::Failed { .. } = state {
        bail!("transcription failed");
    }
    Ok(())
}
