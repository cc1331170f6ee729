//! Timestamp parsing for incident start and end times

use crate::constants::{DATE_ONLY_FORMAT, NAIVE_DATETIME_FORMATS, OFFSET_DATETIME_FORMATS};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a timestamp field into a naive wall-clock datetime
///
/// Offset-aware values keep the local time at their own offset, so the hour
/// used for time-of-day classification is the hour recorded in the source.
/// Returns `None` when no supported format matches.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.naive_local());
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
