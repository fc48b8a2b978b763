//! Server binary.

use clap::Parser;

use imagers_server::{logging, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.log_json);
    config.validate()?;

    tracing::info!(
        addr = %config.bind_addr(),
        fetch_timeout_secs = config.fetch_timeout_secs,
        max_download_bytes = config.max_download_bytes,
        "Starting image processing server"
    );

    let state = AppState::new(config)?;
    imagers_server::serve(state).await?;
    Ok(())
}
