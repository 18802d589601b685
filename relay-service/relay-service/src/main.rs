use anyhow::Result;
use relay_configuration::{load_config, setup_logging};
use relay_setup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }
    let config = load_config()?;
    setup_logging(&config);
    tracing::info!(backend_url = %config.service.backend.url, "configuration loaded");
    let server_config = config.server.clone();
    let app = Application::new(config).await?;
    app.run(server_config).await?;
    Ok(())
}
