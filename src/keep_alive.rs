//! Minimal liveness endpoint for the hosting platform.
//!
//! Some hosts only keep a process alive while it answers HTTP traffic, so the
//! bot exposes a single static route next to the gateway connection. This is
//! not part of the functional surface of the bot.

use axum::{routing::get, Router};

use crate::error::AppError;

/// Serves `GET /` on the configured port until the process exits.
pub async fn serve(port: u16) -> Result<(), AppError> {
    let app = Router::new().route("/", get(liveness));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Keep-alive server running on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn liveness() -> &'static str {
    "Bot is running!"
}
