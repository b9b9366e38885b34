//! Slash command definitions.
//!
//! Registered guild-scoped from the ready handler. Required options are
//! declared before optional ones to satisfy Discord's validation.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::bot::handler::{announce, relay, tryout};

/// Builds the definitions for all three guild commands.
pub fn definitions() -> Vec<CreateCommand> {
    vec![relay_command(), announce_command(), tryout_command()]
}

/// `/scrole` - multi-step DM relay flow.
fn relay_command() -> CreateCommand {
    CreateCommand::new(relay::NAME)
        .description("Administrator-only command.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "choice",
                "Choose Accepted or Reject.",
            )
            .required(true)
            .add_string_choice("Accepted", "accepted")
            .add_string_choice("Reject", "reject"),
        )
}

/// `/eventnc` - custom announcement embed with optional link button.
fn announce_command() -> CreateCommand {
    CreateCommand::new(announce::NAME)
        .description("Create and send a custom event embed (Admins only).")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to send embed in",
            )
            .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "content",
            "Message content above the embed",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "author",
            "Author name",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "author_icon_url",
            "Author icon URL (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "title",
            "Embed title",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "description",
            "Embed description",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "image_url",
            "Image URL (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "thumbnail_url",
            "Thumbnail URL (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "rgb_color",
            "RGB color (example: 255,0,0) (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "footer",
            "Footer text (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "footer_icon_url",
            "Footer icon URL (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "datetime",
            "Date & time for event (YYYY-MM-DD HH:MM PST) (optional)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "link",
            "Optional URL to show as a button under the embed (optional)",
        ))
}

/// `/ifevent` - fixed tryout announcement posted to the events channel.
fn tryout_command() -> CreateCommand {
    CreateCommand::new(tryout::NAME)
        .description("Creates and sends the Iron Fist Tryout embed.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "datetime",
                "Date & time for the tryout (YYYY-MM-DD HH:MM PST)",
            )
            .required(true),
        )
}
