mod bot;
mod config;
mod error;
mod keep_alive;
mod service;
mod util;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::AppError};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("herald=info,serenity=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = Arc::new(Config::from_env()?);

    // Keep-alive endpoint for the hosting platform's uptime checks. Runs
    // alongside the bot; a failure here should not take the bot down.
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = keep_alive::serve(port).await {
            tracing::error!("Keep-alive server error: {}", e);
        }
    });

    bot::start::start_bot(config).await
}
