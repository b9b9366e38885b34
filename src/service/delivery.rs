//! Permission-self-healing message delivery.
//!
//! Every announcement goes through [`send_with_temporary_access`]. If the bot
//! already has the permissions it needs in the target channel it sends
//! directly. If not, and it holds MANAGE_CHANNELS at the guild level, it
//! grants itself a temporary member overwrite scoped to that channel, sends,
//! and removes the overwrite again. The overwrite removal is best-effort and
//! runs on every exit path; a removal failure is logged, never surfaced.

use serenity::all::{
    Channel, ChannelId, ChannelType, Context, CreateMessage, GuildChannel, GuildId, Message,
    PermissionOverwrite, PermissionOverwriteType, Permissions, UserId,
};

use crate::error::command::CommandError;

/// Permissions the bot needs in a channel to deliver an announcement.
pub const REQUIRED_SEND_PERMISSIONS: Permissions = Permissions::VIEW_CHANNEL
    .union(Permissions::SEND_MESSAGES)
    .union(Permissions::EMBED_LINKS)
    .union(Permissions::READ_MESSAGE_HISTORY);

/// Whether a guild channel of this type can receive messages.
pub fn is_text_based(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text
            | ChannelType::News
            | ChannelType::NewsThread
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
    )
}

/// Names of the user-visible permissions missing from `perms`.
///
/// Matches the capabilities enumerated to the user when the bot can neither
/// send nor self-repair (READ_MESSAGE_HISTORY is required for sending but not
/// reported, since it is never the actionable gap).
pub fn missing_permission_names(perms: Permissions) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !perms.contains(Permissions::VIEW_CHANNEL) {
        missing.push("VIEW_CHANNEL");
    }
    if !perms.contains(Permissions::SEND_MESSAGES) {
        missing.push("SEND_MESSAGES");
    }
    if !perms.contains(Permissions::EMBED_LINKS) {
        missing.push("EMBED_LINKS");
    }
    missing
}

/// Resolves a guild channel from the cache, falling back to the HTTP API.
pub async fn resolve_guild_channel(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Result<GuildChannel, CommandError> {
    let cached = ctx
        .cache
        .guild(guild_id)
        .and_then(|guild| guild.channels.get(&channel_id).cloned());
    if let Some(channel) = cached {
        return Ok(channel);
    }

    channel_id
        .to_channel(ctx)
        .await
        .ok()
        .and_then(Channel::guild)
        .ok_or(CommandError::ChannelUnavailable)
}

/// A temporary member permission overwrite for the bot in one channel.
///
/// Acquired only for the duration of a single send. Release is explicit and
/// best-effort so it can run on both the success and failure path of the send.
struct TemporaryGrant<'a> {
    ctx: &'a Context,
    channel: &'a GuildChannel,
    bot_id: UserId,
}

impl<'a> TemporaryGrant<'a> {
    /// Creates the overwrite granting the bot [`REQUIRED_SEND_PERMISSIONS`].
    async fn acquire(
        ctx: &'a Context,
        channel: &'a GuildChannel,
        bot_id: UserId,
    ) -> Result<TemporaryGrant<'a>, CommandError> {
        channel
            .create_permission(
                &ctx.http,
                PermissionOverwrite {
                    allow: REQUIRED_SEND_PERMISSIONS,
                    deny: Permissions::empty(),
                    kind: PermissionOverwriteType::Member(bot_id),
                },
            )
            .await?;

        tracing::debug!(
            "Granted temporary send access in channel {} ({})",
            channel.name,
            channel.id
        );

        Ok(TemporaryGrant {
            ctx,
            channel,
            bot_id,
        })
    }

    /// Removes the overwrite. Best-effort: a failure is logged only.
    async fn release(self) {
        let result = self
            .channel
            .delete_permission(&self.ctx.http, PermissionOverwriteType::Member(self.bot_id))
            .await;

        if let Err(e) = result {
            tracing::warn!(
                "Couldn't delete temporary overwrite in channel {}: {}",
                self.channel.id,
                e
            );
        }
    }
}

/// Sends a message to a channel, self-repairing missing permissions if it can.
///
/// # Arguments
/// - `ctx` - Discord context (cache for permission math, HTTP for delivery)
/// - `channel` - Target guild channel
/// - `message` - Fully built message payload
///
/// # Returns
/// - `Ok(Message)` - The delivered message
/// - `Err(CommandError::NotTextChannel)` - Channel cannot receive messages
/// - `Err(CommandError::MissingPermissions)` - Bot lacks send permissions and
///   has no MANAGE_CHANNELS to grant itself temporary access
/// - `Err(CommandError::Discord)` - Send call rejected by Discord
pub async fn send_with_temporary_access(
    ctx: &Context,
    channel: &GuildChannel,
    message: CreateMessage,
) -> Result<Message, CommandError> {
    if !is_text_based(channel.kind) {
        return Err(CommandError::NotTextChannel);
    }

    let bot_id = ctx.cache.current_user().id;
    let bot_member = channel.guild_id.member(&ctx.http, bot_id).await?;

    // Cache guard must not be held across an await point.
    let (channel_perms, guild_perms) = {
        let guild = ctx
            .cache
            .guild(channel.guild_id)
            .ok_or(CommandError::GuildNotCached)?;
        (
            guild.user_permissions_in(channel, &bot_member),
            guild.member_permissions(&bot_member),
        )
    };

    if channel_perms.contains(REQUIRED_SEND_PERMISSIONS) {
        return Ok(channel.send_message(&ctx.http, message).await?);
    }

    if !guild_perms.contains(Permissions::MANAGE_CHANNELS) {
        return Err(CommandError::MissingPermissions(missing_permission_names(
            channel_perms,
        )));
    }

    let grant = TemporaryGrant::acquire(ctx, channel, bot_id).await?;
    let sent = channel.send_message(&ctx.http, message).await;
    grant.release().await;

    Ok(sent?)
}
