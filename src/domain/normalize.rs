//! Entry date normalization
//!
//! Persisted entries carry their date in one of several shapes. Every shape
//! is reduced here to a single calendar date in a given time zone; anything
//! that cannot be read yields `None` so the entry simply drops out of date
//! based calculations.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Date field of a persisted entry, as found on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntryDate {
    /// Timestamp object: seconds since the Unix epoch plus sub-second nanos (UTC)
    Timestamp { seconds: i64, nanoseconds: u32 },
    /// Milliseconds since the Unix epoch
    Millis(f64),
    /// ISO-8601 date-time or plain date
    Text(String),
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolve a raw entry date to its calendar date in `tz`.
pub fn normalize_date<Tz: TimeZone>(raw: &RawEntryDate, tz: &Tz) -> Option<NaiveDate> {
    match raw {
        RawEntryDate::Timestamp {
            seconds,
            nanoseconds,
        } => DateTime::from_timestamp(*seconds, *nanoseconds)
            .map(|utc| utc.with_timezone(tz).date_naive()),
        RawEntryDate::Millis(millis) => {
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis.trunc() as i64)
                .map(|utc| utc.with_timezone(tz).date_naive())
        }
        RawEntryDate::Text(text) => parse_date_text(text.trim(), tz),
    }
}

fn parse_date_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }

    // Offset-qualified instants are converted into the target zone
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(tz).date_naive());
    }

    // Naive date-times are already local wall-clock time
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.date());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
