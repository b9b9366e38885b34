//! `/ifevent` - fixed Iron Fist Tryout announcement.
//!
//! Gated on either configured role. Everything except the event datetime is
//! fixed content; the result is posted to the configured events channel with
//! a spoiler-wrapped role mention above the embed.

use chrono::Utc;
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, EditInteractionResponse, GuildId,
    Timestamp,
};

use crate::bot::auth::{member_role_names, Access, RoleGate};
use crate::bot::handler::{reply, str_option};
use crate::config::Config;
use crate::error::{command::CommandError, AppError};
use crate::service::delivery::{resolve_guild_channel, send_with_temporary_access};
use crate::util::parse::{discord_timestamp, parse_event_time, pst};

pub const NAME: &str = "ifevent";

const EMBED_COLOR: u32 = 0x2b2d31;

const AUTHOR_NAME: &str = "Task Force Detachment, The Iron Fist";
const AUTHOR_ICON_URL: &str = "https://images-ext-1.discordapp.net/external/B4SyOTb--z2eujaCoVEg_-An4MikiUGy_n1ngphdHgY/%3Fsize%3D4096/https/cdn.discordapp.com/icons/1422806838860189719/5c67f61c22fcd3ce4601bd080476810e.png";

const TITLE: &str = "Iron Fist Tryout";

const IMAGE_URL: &str =
    "https://cdn.discordapp.com/attachments/1423175621344886887/1424500278157250712/NH5e0SG.png";

const INVITE_URL: &str = "https://discord.gg/wKkfBrBPzS";

const BODY: &str = "Iron Fist is the main military force of the Security Corps, which mainly \
specializes in operating a wide selection of vehicles alongside a heavy arsenal such as ground \
and aerial vehicles, specifically tanks, Blackhawks, MRAPS, etc. Whilst being the largest TFD, \
some of the IF duties consist of patrolling around the site, assuring the security of all sites \
entirely, and neutralizing any hostile forces.

**Benefits upon joining:**
• Gain access to a large range of vehicles and weapons and overall sophisticated equipment
• Ability to patrol around the site at your desire
• Advanced on-site permissions

**Requirements:**
• Advanced Combat Level
• Tactical knowledge and sense
• Good communication skills
• Common sense
• Being able to join discord VC's.
• Be ranked Test Subject or higher in the Corporation
(IF/TFD Officer+ may help/spectate)

*Best of Luck,*
*\"Semper Primus, Always First.\"*

**Time**";

/// Builds the fixed tryout embed for the given event time.
///
/// `invoker_name`, `invoker_role` and `invoker_avatar_url` feed the footer
/// line identifying who posted the announcement and when.
pub(crate) fn build_tryout_embed(
    event_unix: i64,
    invoker_name: &str,
    invoker_role: &str,
    invoker_avatar_url: &str,
) -> CreateEmbed {
    let posted_at = Utc::now()
        .with_timezone(&pst())
        .format("%-m/%-d/%Y, %-I:%M:%S %p");

    CreateEmbed::new()
        .color(EMBED_COLOR)
        .author(CreateEmbedAuthor::new(AUTHOR_NAME).icon_url(AUTHOR_ICON_URL))
        .title(TITLE)
        .description(format!(
            "{}\n> {}",
            BODY,
            discord_timestamp(event_unix, 'F')
        ))
        .image(IMAGE_URL)
        .footer(
            CreateEmbedFooter::new(format!(
                "{} ~ {} | {}",
                invoker_name, invoker_role, posted_at
            ))
            .icon_url(invoker_avatar_url),
        )
        .timestamp(Timestamp::now())
}

pub async fn handle(
    ctx: &Context,
    command: &CommandInteraction,
    config: &Config,
) -> Result<(), AppError> {
    let gate = RoleGate::from_config(config);
    let role_names = match (command.guild_id, command.member.as_deref()) {
        (Some(guild_id), Some(member)) => member_role_names(ctx, guild_id, member),
        _ => Vec::new(),
    };
    if gate.check(&role_names) == Access::Denied {
        return reply(ctx, command, CommandError::AccessDenied.user_message(), true).await;
    }

    command.defer_ephemeral(&ctx.http).await?;

    let options = command.data.options();
    let Some(datetime) = str_option(&options, "datetime") else {
        tracing::warn!("/{} invoked without required datetime option", NAME);
        return Ok(());
    };

    let report = match post_tryout(ctx, command, config, &gate, &role_names, datetime).await {
        Ok(()) => format!(
            "✅ Iron Fist Tryout embed successfully sent to <#{}>!",
            config.events_channel_id
        ),
        Err(e) => {
            tracing::error!("/{} failed: {}", NAME, e);
            e.user_message()
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(report))
        .await?;

    Ok(())
}

/// Validates the datetime, builds the fixed embed, and delivers it to the
/// configured events channel.
async fn post_tryout(
    ctx: &Context,
    command: &CommandInteraction,
    config: &Config,
    gate: &RoleGate<'_>,
    role_names: &[String],
    datetime: &str,
) -> Result<(), CommandError> {
    let event_time = parse_event_time(datetime)?;

    let embed = build_tryout_embed(
        event_time.timestamp(),
        &command.user.name,
        gate.display_role(role_names),
        &command.user.face(),
    );

    let button = CreateButton::new_link(INVITE_URL).label("🔗 Discord");
    let message = CreateMessage::new()
        .content(format!("||<@&{}>||", config.ping_role_id))
        .embed(embed)
        .components(vec![CreateActionRow::Buttons(vec![button])]);

    let channel = resolve_guild_channel(
        ctx,
        GuildId::new(config.guild_id),
        ChannelId::new(config.events_channel_id),
    )
    .await?;

    send_with_temporary_access(ctx, &channel, message)
        .await
        .map_err(map_fixed_channel_error)?;

    Ok(())
}

/// Maps delivery errors for the pre-configured events channel.
///
/// The invoker did not pick this channel, so "select a text channel" would
/// point them at the wrong fix; a non-text events channel is a configuration
/// problem and reported as the channel being unavailable.
pub(crate) fn map_fixed_channel_error(err: CommandError) -> CommandError {
    match err {
        CommandError::NotTextChannel => CommandError::ChannelUnavailable,
        other => other,
    }
}
