//! `/eventnc` - custom announcement embed.
//!
//! Gated on either configured role. Builds an embed from eleven optional
//! string options plus a required target channel, then delivers it through
//! the self-healing send path. Datetimes and link URLs are validated
//! strictly; a malformed RGB triple silently falls back to the default
//! accent color.

use chrono::{DateTime, FixedOffset};
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, EditInteractionResponse, GuildId,
    ResolvedOption,
};
use url::Url;

use crate::bot::auth::{member_role_names, Access, RoleGate};
use crate::bot::handler::{channel_option, reply, str_option};
use crate::config::Config;
use crate::error::{command::CommandError, AppError};
use crate::service::delivery::{is_text_based, resolve_guild_channel, send_with_temporary_access};
use crate::util::parse::{discord_timestamp, embed_color, parse_event_time, validate_link};

pub const NAME: &str = "eventnc";

/// Raw option values as supplied by the invoker.
#[derive(Default)]
pub(crate) struct RawAnnouncement<'a> {
    pub content: Option<&'a str>,
    pub author: Option<&'a str>,
    pub author_icon_url: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub thumbnail_url: Option<&'a str>,
    pub rgb_color: Option<&'a str>,
    pub footer: Option<&'a str>,
    pub footer_icon_url: Option<&'a str>,
    pub datetime: Option<&'a str>,
    pub link: Option<&'a str>,
}

impl<'a> RawAnnouncement<'a> {
    fn from_options(options: &[ResolvedOption<'a>]) -> Self {
        Self {
            content: str_option(options, "content"),
            author: str_option(options, "author"),
            author_icon_url: str_option(options, "author_icon_url"),
            title: str_option(options, "title"),
            description: str_option(options, "description"),
            image_url: str_option(options, "image_url"),
            thumbnail_url: str_option(options, "thumbnail_url"),
            rgb_color: str_option(options, "rgb_color"),
            footer: str_option(options, "footer"),
            footer_icon_url: str_option(options, "footer_icon_url"),
            datetime: str_option(options, "datetime"),
            link: str_option(options, "link"),
        }
    }
}

/// A fully validated announcement, ready to render into a message.
#[derive(Debug)]
pub(crate) struct AnnouncementRequest {
    pub content: Option<String>,
    pub author: Option<String>,
    pub author_icon_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub color: u32,
    pub footer: Option<String>,
    pub footer_icon_url: Option<String>,
    pub event_time: Option<DateTime<FixedOffset>>,
    pub link: Option<Url>,
}

impl AnnouncementRequest {
    /// Validates raw options into a request.
    ///
    /// # Returns
    /// - `Ok(AnnouncementRequest)` - All strict fields valid; color resolved
    ///   with fallback
    /// - `Err(CommandError::InvalidDatetime)` - `datetime` did not parse
    /// - `Err(CommandError::InvalidUrl)` - `link` is not a valid URL
    pub(crate) fn validate(raw: RawAnnouncement<'_>) -> Result<Self, CommandError> {
        let event_time = raw.datetime.map(parse_event_time).transpose()?;
        let link = raw.link.map(validate_link).transpose()?;

        Ok(Self {
            content: raw.content.map(str::to_string),
            author: raw.author.map(str::to_string),
            author_icon_url: raw.author_icon_url.map(str::to_string),
            title: raw.title.map(str::to_string),
            description: raw.description.map(str::to_string),
            image_url: raw.image_url.map(str::to_string),
            thumbnail_url: raw.thumbnail_url.map(str::to_string),
            color: embed_color(raw.rgb_color),
            footer: raw.footer.map(str::to_string),
            footer_icon_url: raw.footer_icon_url.map(str::to_string),
            event_time,
            link,
        })
    }
}

/// Renders a validated request into a message payload.
fn build_message(request: &AnnouncementRequest) -> CreateMessage {
    let mut embed = CreateEmbed::new().color(request.color);

    if let Some(author) = &request.author {
        let mut embed_author = CreateEmbedAuthor::new(author);
        if let Some(icon_url) = &request.author_icon_url {
            embed_author = embed_author.icon_url(icon_url);
        }
        embed = embed.author(embed_author);
    }
    if let Some(title) = &request.title {
        embed = embed.title(title);
    }
    if let Some(description) = &request.description {
        embed = embed.description(description);
    }
    if let Some(image_url) = &request.image_url {
        embed = embed.image(image_url);
    }
    if let Some(thumbnail_url) = &request.thumbnail_url {
        embed = embed.thumbnail(thumbnail_url);
    }
    if let Some(footer) = &request.footer {
        let mut embed_footer = CreateEmbedFooter::new(footer);
        if let Some(icon_url) = &request.footer_icon_url {
            embed_footer = embed_footer.icon_url(icon_url);
        }
        embed = embed.footer(embed_footer);
    }
    if let Some(event_time) = &request.event_time {
        let unix = event_time.timestamp();
        embed = embed.field(
            "🕒 Event Time",
            format!(
                "{}\n{}",
                discord_timestamp(unix, 'F'),
                discord_timestamp(unix, 'R')
            ),
            false,
        );
    }

    let mut message = CreateMessage::new().embed(embed);
    if let Some(content) = &request.content {
        message = message.content(content);
    }
    if let Some(link) = &request.link {
        let button = CreateButton::new_link(link.as_str()).label("🔗 Link");
        message = message.components(vec![CreateActionRow::Buttons(vec![button])]);
    }

    message
}

pub async fn handle(
    ctx: &Context,
    command: &CommandInteraction,
    config: &Config,
) -> Result<(), AppError> {
    let gate = RoleGate::from_config(config);
    let Some((guild_id, member)) = command.guild_id.zip(command.member.as_deref()) else {
        return reply(ctx, command, CommandError::AccessDenied.user_message(), true).await;
    };
    if gate.check(&member_role_names(ctx, guild_id, member)) == Access::Denied {
        return reply(ctx, command, CommandError::AccessDenied.user_message(), true).await;
    }

    command.defer_ephemeral(&ctx.http).await?;

    let options = command.data.options();
    let Some(channel_id) = channel_option(&options, "channel") else {
        tracing::warn!("/{} invoked without required channel option", NAME);
        return Ok(());
    };

    let raw = RawAnnouncement::from_options(&options);
    let report = match post_announcement(ctx, guild_id, channel_id, raw).await {
        Ok(destination) => format!("✅ Embed successfully sent to <#{}>!", destination),
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

/// Validates, builds, and delivers the announcement. No message is sent when
/// any strict validation fails.
async fn post_announcement(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    raw: RawAnnouncement<'_>,
) -> Result<ChannelId, CommandError> {
    let channel = resolve_guild_channel(ctx, guild_id, channel_id).await?;
    if !is_text_based(channel.kind) {
        return Err(CommandError::NotTextChannel);
    }

    let request = AnnouncementRequest::validate(raw)?;
    let message = build_message(&request);

    send_with_temporary_access(ctx, &channel, message).await?;

    Ok(channel.id)
}
