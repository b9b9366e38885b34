//! Parsing and validation for user-supplied command options.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use url::Url;

use crate::error::command::CommandError;

/// Accent color applied when no (or a malformed) RGB triple is supplied.
pub const DEFAULT_EMBED_COLOR: u32 = 0x00ae86;

/// Fixed input format for event datetimes.
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Event datetimes are interpreted in a fixed UTC-8 offset (PST).
const PST_OFFSET_SECS: i32 = -8 * 3600;

/// The fixed UTC-8 offset used for all event datetimes.
pub fn pst() -> FixedOffset {
    FixedOffset::east_opt(PST_OFFSET_SECS).expect("static UTC-8 offset is in range")
}

/// Parses an `R,G,B` triple into a packed `0xRRGGBB` color value.
///
/// Returns `None` unless the input is exactly three comma-separated integers
/// in [0,255]. Surrounding whitespace per component is tolerated.
pub fn parse_rgb(input: &str) -> Option<u32> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let mut color = 0u32;
    for part in parts {
        let component: u8 = part.parse().ok()?;
        color = (color << 8) | u32::from(component);
    }

    Some(color)
}

/// Resolves the embed accent color from an optional RGB triple.
///
/// Absent or malformed input falls back to [`DEFAULT_EMBED_COLOR`] rather than
/// reporting a validation error, matching the strictness the original bot
/// applied here (URLs and datetimes stay strict).
pub fn embed_color(rgb: Option<&str>) -> u32 {
    rgb.and_then(parse_rgb).unwrap_or(DEFAULT_EMBED_COLOR)
}

/// Parses an event datetime in the fixed `YYYY-MM-DD HH:MM` format, in PST.
///
/// # Returns
/// - `Ok(DateTime<FixedOffset>)` - The parsed instant
/// - `Err(CommandError::InvalidDatetime)` - Input did not match the format
pub fn parse_event_time(input: &str) -> Result<DateTime<FixedOffset>, CommandError> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), EVENT_TIME_FORMAT)
        .map_err(|_| CommandError::InvalidDatetime(input.to_string()))?;

    naive
        .and_local_timezone(pst())
        .single()
        .ok_or_else(|| CommandError::InvalidDatetime(input.to_string()))
}

/// Validates a link option as a syntactically well-formed absolute URL.
pub fn validate_link(input: &str) -> Result<Url, CommandError> {
    Url::parse(input).map_err(|_| CommandError::InvalidUrl(input.to_string()))
}

/// Renders a Discord timestamp markup token, e.g. `<t:1700000000:F>`.
pub fn discord_timestamp(unix: i64, style: char) -> String {
    format!("<t:{}:{}>", unix, style)
}
