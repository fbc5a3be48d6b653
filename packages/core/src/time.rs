//! Timestamp conversion between form inputs, the backend and the UI.
//!
//! - `datetime-local` inputs produce `YYYY-MM-DDTHH:MM`
//! - the backend accepts `YYYY-MM-DD HH:MM`
//! - listings may return RFC 3339 or space-separated timestamps

use chrono::{DateTime, NaiveDateTime};

use crate::form::FormError;

const LOCAL_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

const BACKEND_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Convert a `datetime-local` value to the backend timestamp format.
pub fn to_backend_timestamp(local: &str) -> Result<String, FormError> {
    let trimmed = local.trim();
    let valid = LOCAL_INPUT_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(trimmed, format).is_ok());
    if !valid {
        return Err(FormError::InvalidTimestamp(local.to_string()));
    }
    Ok(trimmed.replacen('T', " ", 1))
}

/// Parse a timestamp as returned by the listing endpoints.
///
/// Zoned timestamps keep their wall-clock time in their own offset.
pub fn parse_backend_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Some(zoned.naive_local());
    }
    BACKEND_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Convert a backend timestamp into a `datetime-local` input value.
///
/// Returns an empty string when the timestamp cannot be parsed.
pub fn to_local_input(value: &str) -> String {
    parse_backend_timestamp(value)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Short day-first date and time, e.g. `1/5/24, 10:00 am`.
///
/// Unparseable input is shown as-is.
pub fn format_short(value: &str) -> String {
    match parse_backend_timestamp(value) {
        Some(dt) => dt.format("%-d/%-m/%y, %-I:%M %P").to_string(),
        None => value.to_string(),
    }
}
