use crate::bot::handler::tryout::map_fixed_channel_error;
use crate::error::command::CommandError;

/// Tests that a non-text events channel is reported as unavailable.
///
/// The events channel is fixed configuration, not an invoker choice, so the
/// "select a text channel" wording must not leak through for it.
#[test]
fn non_text_events_channel_reports_unavailable() {
    let mapped = map_fixed_channel_error(CommandError::NotTextChannel);
    assert!(matches!(mapped, CommandError::ChannelUnavailable));
    assert_eq!(
        mapped.user_message(),
        "❌ Channel not found or not a text channel."
    );
}

/// Tests that other delivery errors pass through unchanged.
#[test]
fn other_delivery_errors_pass_through() {
    let missing = CommandError::MissingPermissions(vec!["SEND_MESSAGES"]);
    assert!(matches!(
        map_fixed_channel_error(missing),
        CommandError::MissingPermissions(names) if names == vec!["SEND_MESSAGES"]
    ));

    assert!(matches!(
        map_fixed_channel_error(CommandError::GuildNotCached),
        CommandError::GuildNotCached
    ));
}
