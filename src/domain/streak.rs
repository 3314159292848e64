//! Current journaling streak

use crate::domain::entry::{distinct_days, JournalEntry};
use chrono::NaiveDate;

/// Count consecutive days with at least one entry, ending today or yesterday.
///
/// The streak is anchored at the most recent entry day. If that day is
/// neither today nor yesterday (older, or dated in the future) the streak is
/// broken and 0 is returned. Otherwise days are counted backwards until the
/// first missing day. Several entries on one day count once.
pub fn compute_streak(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let days = distinct_days(entries);
    let mut descending = days.iter().rev();

    let Some(&latest) = descending.next() else {
        return 0;
    };

    if latest != today && Some(latest) != today.pred_opt() {
        return 0;
    }

    let mut streak = 1;
    let mut anchor = latest;
    for &day in descending {
        if Some(day) != anchor.pred_opt() {
            break;
        }
        streak += 1;
        anchor = day;
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn entries_on(offsets: &[i64]) -> Vec<JournalEntry> {
        offsets
            .iter()
            .map(|&n| JournalEntry::new(days_ago(n), Mood::Okay, format!("{} days ago", n)))
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute_streak(&[], today()), 0);
    }

    #[test]
    fn test_all_entries_today() {
        assert_eq!(compute_streak(&entries_on(&[0]), today()), 1);
        assert_eq!(compute_streak(&entries_on(&[0, 0, 0, 0]), today()), 1);
    }

    #[test]
    fn test_three_consecutive_days() {
        assert_eq!(compute_streak(&entries_on(&[0, 1, 2]), today()), 3);
    }

    #[test]
    fn test_streak_may_end_yesterday() {
        assert_eq!(compute_streak(&entries_on(&[1, 2, 3, 4]), today()), 4);
    }

    #[test]
    fn test_gap_breaks_after_today() {
        assert_eq!(compute_streak(&entries_on(&[0, 3]), today()), 1);
    }

    #[test]
    fn test_stale_history_is_zero() {
        assert_eq!(compute_streak(&entries_on(&[2]), today()), 0);
        assert_eq!(compute_streak(&entries_on(&[2, 3, 4, 5]), today()), 0);
    }

    #[test]
    fn test_same_day_duplicates_count_once() {
        assert_eq!(compute_streak(&entries_on(&[0, 0, 0, 1]), today()), 2);
    }

    #[test]
    fn test_only_current_run_is_counted() {
        // Long unbroken run further back does not matter once a day is missed
        assert_eq!(
            compute_streak(&entries_on(&[0, 1, 3, 4, 5, 6, 7, 8]), today()),
            2
        );
    }

    #[test]
    fn test_dateless_entries_are_ignored() {
        let mut entries = entries_on(&[0, 1]);
        entries.push(JournalEntry {
            date: None,
            ..JournalEntry::new(today(), Mood::Great, "lost date")
        });
        assert_eq!(compute_streak(&entries, today()), 2);

        let only_dateless: Vec<JournalEntry> = entries.into_iter().skip(2).collect();
        assert_eq!(compute_streak(&only_dateless, today()), 0);
    }

    #[test]
    fn test_future_entry_breaks_streak() {
        // Tomorrow is the most recent day, which is neither today nor yesterday
        assert_eq!(compute_streak(&entries_on(&[-1, 0, 1]), today()), 0);
        assert_eq!(compute_streak(&entries_on(&[-3]), today()), 0);
    }

    #[test]
    fn test_crosses_month_and_year_boundaries() {
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let entries = vec![
            JournalEntry::new(new_year, Mood::Good, "a"),
            JournalEntry::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(), Mood::Good, "b"),
            JournalEntry::new(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(), Mood::Good, "c"),
        ];
        assert_eq!(compute_streak(&entries, new_year), 3);
    }

    #[test]
    fn test_order_and_repetition_do_not_matter() {
        let entries = entries_on(&[2, 0, 5, 1, 0, 3]);
        let mut reversed = entries.clone();
        reversed.reverse();

        let first = compute_streak(&entries, today());
        assert_eq!(first, 4);
        assert_eq!(compute_streak(&entries, today()), first);
        assert_eq!(compute_streak(&reversed, today()), first);
    }
}
