//! Command interaction dispatch.
//!
//! The [`Handler`] receives gateway events and routes each chat-input command
//! to its handler module. Handlers report every user-facing outcome
//! (validation failures, timeouts, delivery errors) through interaction
//! responses themselves; only unexpected response/API failures bubble up here
//! and are logged.

use std::sync::Arc;

use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EventHandler,
    Interaction, Ready, ResolvedOption, ResolvedValue,
};
use serenity::async_trait;

use crate::config::Config;
use crate::error::AppError;

pub mod announce;
pub mod ready;
pub mod relay;
pub mod tryout;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    config: Arc<Config>,
}

impl Handler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, data: Ready) {
        ready::handle_ready(ctx, data, &self.config).await;
    }

    /// Called for every interaction; dispatches chat-input commands
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let name = command.data.name.clone();
        let result = match name.as_str() {
            relay::NAME => relay::handle(&ctx, &command, &self.config).await,
            announce::NAME => announce::handle(&ctx, &command, &self.config).await,
            tryout::NAME => tryout::handle(&ctx, &command, &self.config).await,
            other => {
                tracing::warn!("Received unknown command /{}", other);
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::error!("Command /{} failed: {}", name, e);
        }
    }
}

/// Looks up a string option by name.
pub(crate) fn str_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::String(value) if option.name == name => Some(*value),
        _ => None,
    })
}

/// Looks up a channel option by name.
pub(crate) fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Option<ChannelId> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::Channel(channel) if option.name == name => Some(channel.id),
        _ => None,
    })
}

/// Sends the initial interaction response.
pub(crate) async fn reply(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}

/// Sends a follow-up message after the initial response.
pub(crate) async fn followup(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(ephemeral),
        )
        .await?;
    Ok(())
}
