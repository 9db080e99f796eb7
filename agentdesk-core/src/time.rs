//! Timestamp parsing and formatting for wire date strings.
//!
//! Parsing never fails: anything that is not a recognisable date yields
//! `None`. The store writes RFC 3339 for timezone-aware columns but SQLite
//! backed deployments hand back naive `isoformat()` strings, which are read
//! as UTC.

use crate::Timestamp;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a wire date string into a UTC timestamp.
pub fn parse_timestamp(value: Option<&str>) -> Option<Timestamp> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp for the wire (`2024-01-01T00:00:00.000Z`).
///
/// Absence stays absent; callers skip the key instead of sending `""`.
pub fn to_iso(value: Option<&Timestamp>) -> Option<String> {
    value.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
