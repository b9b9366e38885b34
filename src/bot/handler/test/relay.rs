use crate::bot::handler::relay::RelayStep;

/// Tests that an elapsed mention wait reports the mention timeout.
///
/// When no qualifying message arrives within the window while awaiting the
/// target mention, the flow must abort with the mention-specific reply and
/// no direct message is sent.
#[test]
fn mention_timeout_reports_missing_mention() {
    assert_eq!(
        RelayStep::AwaitMention.timeout_message(),
        "⌛ You did not mention a user in time."
    );
}

/// Tests that an elapsed content wait reports the message timeout.
#[test]
fn message_timeout_reports_missing_message() {
    assert_eq!(
        RelayStep::AwaitMessage.timeout_message(),
        "⌛ You did not provide a message in time."
    );
}

/// Tests that the two states stay distinguishable to the invoker.
#[test]
fn timeout_messages_are_state_specific() {
    assert_ne!(
        RelayStep::AwaitMention.timeout_message(),
        RelayStep::AwaitMessage.timeout_message()
    );
}
