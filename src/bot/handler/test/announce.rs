use chrono::{TimeZone, Utc};

use crate::bot::handler::announce::{AnnouncementRequest, RawAnnouncement};
use crate::error::command::CommandError;
use crate::util::parse::DEFAULT_EMBED_COLOR;

/// Tests that an empty invocation is valid and carries only the default
/// accent color.
#[test]
fn validates_minimal_request() {
    let request = AnnouncementRequest::validate(RawAnnouncement::default()).unwrap();

    assert_eq!(request.color, DEFAULT_EMBED_COLOR);
    assert!(request.content.is_none());
    assert!(request.author.is_none());
    assert!(request.title.is_none());
    assert!(request.event_time.is_none());
    assert!(request.link.is_none());
}

/// Tests that all supplied fields survive validation.
#[test]
fn validates_fully_populated_request() {
    let raw = RawAnnouncement {
        content: Some("above the embed"),
        author: Some("Events Team"),
        author_icon_url: Some("https://example.com/author.png"),
        title: Some("Game Night"),
        description: Some("Bring snacks"),
        image_url: Some("https://example.com/banner.png"),
        thumbnail_url: Some("https://example.com/thumb.png"),
        rgb_color: Some("255,128,0"),
        footer: Some("See you there"),
        footer_icon_url: Some("https://example.com/footer.png"),
        datetime: Some("2025-10-05 18:30"),
        link: Some("https://example.com/event"),
    };

    let request = AnnouncementRequest::validate(raw).unwrap();

    assert_eq!(request.content.as_deref(), Some("above the embed"));
    assert_eq!(request.author.as_deref(), Some("Events Team"));
    assert_eq!(request.title.as_deref(), Some("Game Night"));
    assert_eq!(request.color, 0xff8000);
    assert_eq!(request.footer.as_deref(), Some("See you there"));
    assert_eq!(
        request.link.as_ref().map(|l| l.as_str()),
        Some("https://example.com/event")
    );

    // 18:30 PST is 02:30 next day UTC
    let expected = Utc.with_ymd_and_hms(2025, 10, 6, 2, 30, 0).unwrap();
    assert_eq!(
        request.event_time.unwrap().with_timezone(&Utc),
        expected
    );
}

/// Tests the silent fallback for a malformed RGB triple.
#[test]
fn malformed_rgb_falls_back_to_default() {
    let raw = RawAnnouncement {
        rgb_color: Some("999,0,0"),
        ..Default::default()
    };

    let request = AnnouncementRequest::validate(raw).unwrap();
    assert_eq!(request.color, DEFAULT_EMBED_COLOR);
}

/// Tests that a malformed datetime is a hard validation failure.
#[test]
fn malformed_datetime_is_rejected() {
    let raw = RawAnnouncement {
        title: Some("Game Night"),
        datetime: Some("next friday"),
        ..Default::default()
    };

    let err = AnnouncementRequest::validate(raw).unwrap_err();
    assert!(matches!(err, CommandError::InvalidDatetime(_)));
}

/// Tests that a malformed link is a hard validation failure.
#[test]
fn malformed_link_is_rejected() {
    let raw = RawAnnouncement {
        link: Some("not a url"),
        ..Default::default()
    };

    let err = AnnouncementRequest::validate(raw).unwrap_err();
    assert!(matches!(err, CommandError::InvalidUrl(_)));
}
