//! Time reference parsing and resolution

use crate::error::{ReflectError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied day, relative or absolute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    /// Current day if it matches, otherwise the most recent occurrence
    Weekday(Weekday),
    /// Previous occurrence, strictly before today
    LastWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            _ if normalized.starts_with("last ") => parse_weekday(normalized[5..].trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(|| ReflectError::InvalidTimeReference(input.to_string())),
            _ => {
                if let Some(day) = parse_weekday(&normalized) {
                    return Ok(TimeReference::Weekday(day));
                }
                // DD-MM-YYYY first, then ISO
                NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                    .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| ReflectError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve this time reference against `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            TimeReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days since the most recent `target`, 0 when today is `target`
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    ((current + 7 - target.num_days_from_monday()) % 7) as i64
}
