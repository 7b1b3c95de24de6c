//! Date parsing and display.
//!
//! Timestamps are normalised to UTC. Inputs without an offset (including the
//! `YYYY-MM-DDTHH:MM` shape produced by date-time pickers) are read as UTC so
//! that filtering and display agree regardless of the host timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::data::CellValue;

/// Offset-less layouts accepted after RFC 3339, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// en-US short month, day, year, 12-hour clock.
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Parse a date string.
///
/// Accepts RFC 3339, `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` and `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Date view of a cell: text is parsed, numbers are epoch milliseconds.
pub fn parse_value(value: &CellValue) -> Option<DateTime<Utc>> {
    match value {
        CellValue::Text(s) => parse_date(s),
        CellValue::Number(ms) if ms.is_finite() => DateTime::from_timestamp_millis(*ms as i64),
        _ => None,
    }
}

/// Render a timestamp as `Jan 15, 2024, 02:30 PM`.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
