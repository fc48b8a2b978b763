//! Imagers Server - HTTP front end for `imagers-core`
//!
//! Every endpoint takes a JSON body naming a source image URL, downloads
//! it, runs one transform, and answers with the result base64-encoded.

pub mod config;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod logging;
pub mod orchestrator;
pub mod router;
pub mod state;
pub mod types;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

/// Bind to the configured address and serve until Ctrl+C.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let addr = state.config().bind_addr();
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Image processing server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down...");
        })
        .await
}
