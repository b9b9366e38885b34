//! `/scrole` - interactive DM relay flow.
//!
//! Admin-only. After the initial reply the flow walks two explicit states,
//! each with its own bounded wait on the invoker's next message in the
//! invoking channel: first a user mention selecting the relay target, then
//! free-text content. The content is finally relayed to the target as a
//! direct message, with each step's outcome reported as a follow-up.

use std::time::Duration;

use serenity::all::{CommandInteraction, Context, CreateMessage, Mentionable, Message};
use serenity::collector::MessageCollector;

use crate::bot::auth::{member_role_names, Access, RoleGate};
use crate::bot::handler::{followup, reply, str_option};
use crate::config::Config;
use crate::error::{command::CommandError, AppError};

pub const NAME: &str = "scrole";

/// Bounded wait applied to each collection step.
const STEP_WAIT: Duration = Duration::from_secs(60);

/// The two bounded-wait states of the relay flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelayStep {
    AwaitMention,
    AwaitMessage,
}

impl RelayStep {
    pub(crate) fn timeout_message(self) -> &'static str {
        match self {
            Self::AwaitMention => "⌛ You did not mention a user in time.",
            Self::AwaitMessage => "⌛ You did not provide a message in time.",
        }
    }
}

pub async fn handle(
    ctx: &Context,
    command: &CommandInteraction,
    config: &Config,
) -> Result<(), AppError> {
    let gate = RoleGate::from_config(config);
    let allowed = match (command.guild_id, command.member.as_deref()) {
        (Some(guild_id), Some(member)) => {
            gate.check(&member_role_names(ctx, guild_id, member)) == Access::Admin
        }
        _ => false,
    };
    if !allowed {
        return reply(ctx, command, CommandError::AccessDenied.user_message(), true).await;
    }

    let options = command.data.options();
    let Some(choice) = str_option(&options, "choice") else {
        tracing::warn!("/{} invoked without required choice option", NAME);
        return Ok(());
    };

    reply(
        ctx,
        command,
        format!(
            "You selected **{}**. Please mention the user you want to message (e.g. @username).",
            choice
        ),
        false,
    )
    .await?;

    // State 1: wait for a message mentioning the relay target.
    let Some(mention_message) = await_invoker_message(ctx, command, RelayStep::AwaitMention).await
    else {
        return followup(ctx, command, RelayStep::AwaitMention.timeout_message(), true).await;
    };

    let Some(target) = mention_message.mentions.first().cloned() else {
        return followup(ctx, command, "❌ You did not mention a valid user.", true).await;
    };

    followup(
        ctx,
        command,
        format!(
            "✅ Mention valid! Now type the **message** to send to {}.",
            target.mention()
        ),
        false,
    )
    .await?;

    // State 2: wait for the message content to relay.
    let Some(content_message) = await_invoker_message(ctx, command, RelayStep::AwaitMessage).await
    else {
        return followup(ctx, command, RelayStep::AwaitMessage.timeout_message(), true).await;
    };

    let dm = CreateMessage::new().content(content_message.content.clone());
    match target.dm(&ctx.http, dm).await {
        Ok(_) => {
            followup(
                ctx,
                command,
                format!("✅ Message successfully sent to {}!", target.mention()),
                false,
            )
            .await
        }
        Err(e) => {
            tracing::error!("Failed to relay DM to {}: {}", target.id, e);
            followup(
                ctx,
                command,
                "❌ Failed to send message. User may have DMs closed.",
                false,
            )
            .await
        }
    }
}

/// Waits up to [`STEP_WAIT`] for the invoker's next message in the invoking
/// channel. Returns `None` when the window elapses.
async fn await_invoker_message(
    ctx: &Context,
    command: &CommandInteraction,
    step: RelayStep,
) -> Option<Message> {
    let collected = MessageCollector::new(&ctx.shard)
        .channel_id(command.channel_id)
        .author_id(command.user.id)
        .timeout(STEP_WAIT)
        .next()
        .await;

    if collected.is_none() {
        tracing::debug!(
            "/{} {:?} timed out for user {}",
            NAME,
            step,
            command.user.id
        );
    }

    collected
}
