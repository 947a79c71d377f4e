//! Shared utility functions: timestamp parsing and unit conversion.

use crate::error::{Result, StatsError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Format used when writing `endTime` values back out.
pub const END_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: f64 = 60_000.0;

// Spotify exports use the first form; the others show up in hand-edited or
// re-exported files.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses an export `endTime` string.
///
/// Offset-carrying RFC 3339 values keep the wall-clock time of their own
/// offset. A bare date resolves to midnight.
pub fn parse_end_time(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(StatsError::timestamp(value))
}

/// Serde adapter for `endTime` fields.
pub fn deserialize_end_time<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_end_time(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter writing `endTime` in [`END_TIME_FORMAT`].
pub fn serialize_end_time<S>(value: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(END_TIME_FORMAT).to_string())
}

/// Formats a timestamp for display.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Converts milliseconds to minutes.
#[allow(clippy::cast_precision_loss)]
pub fn ms_to_minutes(ms: u64) -> f64 {
    ms as f64 / MS_PER_MINUTE
}

/// Converts milliseconds to seconds.
#[allow(clippy::cast_precision_loss)]
pub fn ms_to_seconds(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

/// Converts seconds to hours.
pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / 3600.0
}

/// Rounds to a fixed number of decimal places.
///
/// Ties round half to even on the exact binary value, so `0.125` becomes
/// `0.12` while `0.135` (stored slightly above the tie) becomes `0.14`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
