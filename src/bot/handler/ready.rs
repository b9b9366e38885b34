//! Ready event handler for bot initialization.
//!
//! Fired when the bot completes the gateway handshake. Used to log connection
//! information and register the guild-scoped slash commands (registration is
//! idempotent, so re-running it on reconnect is fine).

use serenity::all::{Context, GuildId, Ready};

use crate::bot::commands;
use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used for command registration
/// - `data` - Ready event data containing bot user information
/// - `config` - Application configuration with the target guild ID
pub async fn handle_ready(ctx: Context, data: Ready, config: &Config) {
    tracing::info!("{} is connected to Discord", data.user.name);

    let guild_id = GuildId::new(config.guild_id);
    match guild_id
        .set_commands(&ctx.http, commands::definitions())
        .await
    {
        Ok(registered) => {
            tracing::info!(
                "Registered {} slash commands for guild {}",
                registered.len(),
                guild_id
            );
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {}", e);
        }
    }
}
