use serenity::all::{ChannelType, Permissions};

use crate::service::delivery::{
    is_text_based, missing_permission_names, REQUIRED_SEND_PERMISSIONS,
};

/// Tests that all three user-visible permissions are reported when the bot
/// has none of them.
#[test]
fn reports_all_missing_permissions() {
    let missing = missing_permission_names(Permissions::empty());
    assert_eq!(missing, vec!["VIEW_CHANNEL", "SEND_MESSAGES", "EMBED_LINKS"]);
}

/// Tests that only the actual gaps are reported.
#[test]
fn reports_only_absent_permissions() {
    let perms = Permissions::VIEW_CHANNEL | Permissions::EMBED_LINKS;
    assert_eq!(missing_permission_names(perms), vec!["SEND_MESSAGES"]);
}

/// Tests that a fully permitted bot reports no gaps.
#[test]
fn reports_nothing_when_fully_permitted() {
    assert!(missing_permission_names(REQUIRED_SEND_PERMISSIONS).is_empty());
    assert!(missing_permission_names(Permissions::all()).is_empty());
}

#[test]
fn required_send_permissions_include_history() {
    assert!(REQUIRED_SEND_PERMISSIONS.contains(Permissions::READ_MESSAGE_HISTORY));
}

#[test]
fn classifies_text_based_channels() {
    assert!(is_text_based(ChannelType::Text));
    assert!(is_text_based(ChannelType::News));
    assert!(is_text_based(ChannelType::PublicThread));
    assert!(!is_text_based(ChannelType::Voice));
    assert!(!is_text_based(ChannelType::Category));
    assert!(!is_text_based(ChannelType::Forum));
}
