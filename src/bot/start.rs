use std::sync::Arc;

use serenity::all::{ApplicationId, Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the serenity client and runs it until shutdown. Command
/// registration happens in the ready handler once the gateway session is
/// established.
///
/// # Arguments
/// - `config` - Application configuration (token, guild, role names)
///
/// # Returns
/// - `Ok(())` if the bot runs to shutdown
/// - `Err(AppError)` if client construction or the connection fails
pub async fn start_bot(config: Arc<Config>) -> Result<(), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - they must be
    // enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let application_id = ApplicationId::new(config.discord_application_id);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(config))
        .await?;

    // Interaction endpoints require the application ID before the ready
    // event has delivered it.
    client.http.set_application_id(application_id);

    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
