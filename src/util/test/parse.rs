use chrono::{TimeZone, Utc};

use crate::error::command::CommandError;
use crate::util::parse::{
    discord_timestamp, embed_color, parse_event_time, parse_rgb, validate_link,
    DEFAULT_EMBED_COLOR,
};

/// Tests that well-formed RGB triples pack into the expected color value.
#[test]
fn parses_valid_rgb_triples() {
    assert_eq!(parse_rgb("255,0,0"), Some(0xff0000));
    assert_eq!(parse_rgb("0,255,0"), Some(0x00ff00));
    assert_eq!(parse_rgb("0,0,255"), Some(0x0000ff));
    assert_eq!(parse_rgb("18, 52, 86"), Some(0x123456));
    assert_eq!(parse_rgb("0,0,0"), Some(0x000000));
    assert_eq!(parse_rgb("255,255,255"), Some(0xffffff));
}

/// Tests that anything other than exactly three in-range integers is rejected.
#[test]
fn rejects_malformed_rgb_triples() {
    assert_eq!(parse_rgb(""), None);
    assert_eq!(parse_rgb("255,0"), None);
    assert_eq!(parse_rgb("255,0,0,0"), None);
    assert_eq!(parse_rgb("256,0,0"), None);
    assert_eq!(parse_rgb("-1,0,0"), None);
    assert_eq!(parse_rgb("a,b,c"), None);
    assert_eq!(parse_rgb("255;0;0"), None);
}

/// Tests the silent fallback to the default accent color.
///
/// Any input that is not a valid triple (including absence) must yield
/// DEFAULT_EMBED_COLOR rather than an error.
#[test]
fn falls_back_to_default_color() {
    assert_eq!(embed_color(None), DEFAULT_EMBED_COLOR);
    assert_eq!(embed_color(Some("not a color")), DEFAULT_EMBED_COLOR);
    assert_eq!(embed_color(Some("300,0,0")), DEFAULT_EMBED_COLOR);
    assert_eq!(embed_color(Some("255,0,0")), 0xff0000);
}

/// Tests that the fixed-format datetime parses as a UTC-8 local time.
#[test]
fn parses_event_time_in_pst() {
    let parsed = parse_event_time("2025-10-05 18:30").unwrap();

    // 18:30 at UTC-8 is 02:30 the next day in UTC
    let expected = Utc.with_ymd_and_hms(2025, 10, 6, 2, 30, 0).unwrap();
    assert_eq!(parsed.with_timezone(&Utc), expected);
}

/// Tests that inputs outside the fixed format are validation failures.
#[test]
fn rejects_malformed_event_times() {
    for input in [
        "",
        "2025-10-05",
        "18:30",
        "2025-13-05 18:30",
        "2025-10-05 25:00",
        "2025-10-05 18:30 PST",
        "05-10-2025 18:30",
        "tomorrow",
    ] {
        let err = parse_event_time(input).unwrap_err();
        assert!(
            matches!(err, CommandError::InvalidDatetime(_)),
            "input {:?} should be an invalid datetime",
            input
        );
    }
}

/// Tests URL validation for the optional link button.
#[test]
fn validates_links() {
    assert!(validate_link("https://example.com").is_ok());
    assert!(validate_link("https://discord.gg/wKkfBrBPzS").is_ok());

    for input in ["", "not a url", "example.com", "/relative/path"] {
        let err = validate_link(input).unwrap_err();
        assert!(
            matches!(err, CommandError::InvalidUrl(_)),
            "input {:?} should be an invalid URL",
            input
        );
    }
}

#[test]
fn renders_discord_timestamps() {
    assert_eq!(discord_timestamp(1700000000, 'F'), "<t:1700000000:F>");
    assert_eq!(discord_timestamp(1700000000, 'R'), "<t:1700000000:R>");
}
