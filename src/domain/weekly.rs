//! Weekly goal progress
//!
//! Weeks start on Monday. Progress is the number of distinct days in the
//! current week with at least one entry.

use crate::domain::entry::{distinct_days, JournalEntry};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use serde::Serialize;

/// Goal used when none is configured
pub const DEFAULT_WEEKLY_GOAL: u32 = 3;

/// Smallest and largest goal a user may configure
pub const MIN_WEEKLY_GOAL: u32 = 1;
pub const MAX_WEEKLY_GOAL: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyProgress {
    pub progress: u32,
    pub goal: u32,
    /// 0..=100
    pub percentage: f64,
    pub goal_met: bool,
}

impl WeeklyProgress {
    fn new(progress: u32, goal: u32) -> Self {
        // No goal means nothing to measure against
        if goal == 0 {
            return WeeklyProgress {
                progress,
                goal,
                percentage: 0.0,
                goal_met: false,
            };
        }

        let percentage = (f64::from(progress) / f64::from(goal) * 100.0).min(100.0);
        WeeklyProgress {
            progress,
            goal,
            percentage,
            goal_met: progress >= goal,
        }
    }
}

/// First (Monday) and last (Sunday) day of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date
        .checked_sub_signed(Duration::days(date.weekday().num_days_from_monday() as i64))
        .unwrap_or(NaiveDate::MIN);
    let sunday = monday
        .checked_add_signed(Duration::days(6))
        .unwrap_or(NaiveDate::MAX);
    (monday, sunday)
}

/// Compare the distinct journaling days of the week containing `now`
/// against `goal`.
pub fn compute_weekly_progress<Tz: TimeZone>(
    entries: &[JournalEntry],
    now: &DateTime<Tz>,
    goal: u32,
) -> WeeklyProgress {
    let (monday, sunday) = week_bounds(now.date_naive());
    let progress = distinct_days(entries).range(monday..=sunday).count();

    WeeklyProgress::new(progress as u32, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::{FixedOffset, Utc, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at_noon(day: NaiveDate) -> DateTime<Utc> {
        day.and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    fn entry(day: NaiveDate) -> JournalEntry {
        JournalEntry::new(day, Mood::Okay, "entry")
    }

    // Wednesday, Jan 15, 2025
    fn wednesday() -> NaiveDate {
        date(2025, 1, 15)
    }

    #[test]
    fn test_week_bounds_monday_start() {
        assert_eq!(wednesday().weekday(), Weekday::Wed);
        assert_eq!(
            week_bounds(wednesday()),
            (date(2025, 1, 13), date(2025, 1, 19))
        );
        // Monday and Sunday map to their own week
        assert_eq!(week_bounds(date(2025, 1, 13)).0, date(2025, 1, 13));
        assert_eq!(week_bounds(date(2025, 1, 19)).0, date(2025, 1, 13));
        // Week spanning the new year
        assert_eq!(
            week_bounds(date(2025, 1, 1)),
            (date(2024, 12, 30), date(2025, 1, 5))
        );
    }

    #[test]
    fn test_previous_sunday_belongs_to_previous_week() {
        let entries = vec![
            entry(date(2025, 1, 13)),
            entry(wednesday()),
            entry(date(2025, 1, 12)),
        ];

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 3);
        assert_eq!(result.progress, 2);
        assert_eq!(result.goal, 3);
        assert!((result.percentage - 66.666_666).abs() < 0.001);
        assert!(!result.goal_met);
    }

    #[test]
    fn test_goal_met_clamps_percentage() {
        let entries: Vec<JournalEntry> = (13..=17).map(|d| entry(date(2025, 1, d))).collect();

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 3);
        assert_eq!(result.progress, 5);
        assert_eq!(result.percentage, 100.0);
        assert!(result.goal_met);

        let exact = compute_weekly_progress(&entries[..3], &at_noon(wednesday()), 3);
        assert_eq!(exact.percentage, 100.0);
        assert!(exact.goal_met);
    }

    #[test]
    fn test_same_day_entries_count_once() {
        let entries = vec![
            entry(wednesday()),
            entry(wednesday()),
            entry(wednesday()),
            entry(date(2025, 1, 14)),
        ];

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 7);
        assert_eq!(result.progress, 2);
    }

    #[test]
    fn test_sunday_entry_included_in_its_week() {
        let entries = vec![entry(date(2025, 1, 19)), entry(date(2025, 1, 20))];

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 3);
        assert_eq!(result.progress, 1);
    }

    #[test]
    fn test_now_is_read_in_its_own_zone() {
        // Monday 01:00 at +02:00 is still Sunday in UTC
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2025, 1, 20, 1, 0, 0).unwrap();
        let entries = vec![entry(date(2025, 1, 20))];

        let result = compute_weekly_progress(&entries, &now, 3);
        assert_eq!(result.progress, 1);
        assert_eq!(
            compute_weekly_progress(&entries, &now.with_timezone(&Utc), 3).progress,
            0
        );
    }

    #[test]
    fn test_no_entries_this_week() {
        let entries = vec![entry(date(2024, 12, 25))];

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 3);
        assert_eq!(result.progress, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(!result.goal_met);

        let empty = compute_weekly_progress(&[], &at_noon(wednesday()), 3);
        assert_eq!(empty, result);
    }

    #[test]
    fn test_zero_goal_is_never_met() {
        let entries = vec![entry(wednesday())];

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 0);
        assert_eq!(result.progress, 1);
        assert_eq!(result.goal, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(!result.goal_met);
    }

    #[test]
    fn test_dateless_entries_are_ignored() {
        let mut entries = vec![entry(wednesday())];
        entries.push(JournalEntry {
            date: None,
            ..entry(wednesday())
        });

        let result = compute_weekly_progress(&entries, &at_noon(wednesday()), 3);
        assert_eq!(result.progress, 1);
    }

    #[test]
    fn test_order_does_not_matter() {
        let entries = vec![
            entry(date(2025, 1, 13)),
            entry(date(2025, 1, 12)),
            entry(wednesday()),
        ];
        let mut reversed = entries.clone();
        reversed.reverse();

        let now = at_noon(wednesday());
        let first = compute_weekly_progress(&entries, &now, 3);
        assert_eq!(compute_weekly_progress(&entries, &now, 3), first);
        assert_eq!(compute_weekly_progress(&reversed, &now, 3), first);
    }
}
