//! Journal entries and history filtering

use crate::domain::Mood;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A journal entry with its date already resolved to a local calendar day.
///
/// `date` is `None` when the stored date was missing or unreadable; such
/// entries are kept in the history but never count toward streaks, weekly
/// progress or trends.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub mood: Mood,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl JournalEntry {
    /// Create a new entry for the given day
    pub fn new(date: NaiveDate, mood: Mood, content: impl Into<String>) -> Self {
        JournalEntry {
            id: Uuid::new_v4(),
            date: Some(date),
            mood,
            content: content.into(),
            created_at: Some(Utc::now()),
        }
    }
}

/// Collect the distinct calendar days that have at least one entry.
pub fn distinct_days<'a, I>(entries: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    entries.into_iter().filter_map(|e| e.date).collect()
}

/// Inclusive date range; an unset bound is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        DateRange { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Whether an entry belongs to this range. Dateless entries only belong
    /// to the unbounded range.
    pub fn includes(&self, entry: &JournalEntry) -> bool {
        match entry.date {
            Some(date) => self.contains(date),
            None => self.is_unbounded(),
        }
    }
}

/// Select entries in `range`, newest first, truncated to `limit`.
/// Dateless entries sort after dated ones.
pub fn filter_entries(
    entries: &[JournalEntry],
    range: DateRange,
    limit: Option<usize>,
) -> Vec<JournalEntry> {
    let mut selected: Vec<JournalEntry> = entries
        .iter()
        .filter(|e| range.includes(e))
        .cloned()
        .collect();

    selected.sort_by(|a, b| match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| b.created_at.cmp(&a.created_at)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at),
    });

    if let Some(n) = limit {
        selected.truncate(n);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dateless(content: &str) -> JournalEntry {
        JournalEntry {
            date: None,
            ..JournalEntry::new(date(2000, 1, 1), Mood::Okay, content)
        }
    }

    #[test]
    fn test_distinct_days_dedupes_and_skips_dateless() {
        let entries = vec![
            JournalEntry::new(date(2025, 1, 17), Mood::Good, "a"),
            JournalEntry::new(date(2025, 1, 17), Mood::Bad, "b"),
            JournalEntry::new(date(2025, 1, 15), Mood::Okay, "c"),
            dateless("d"),
        ];

        let days: Vec<NaiveDate> = distinct_days(&entries).into_iter().collect();
        assert_eq!(days, vec![date(2025, 1, 15), date(2025, 1, 17)]);
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(Some(date(2025, 1, 10)), Some(date(2025, 1, 20)));
        assert!(range.contains(date(2025, 1, 10)));
        assert!(range.contains(date(2025, 1, 20)));
        assert!(!range.contains(date(2025, 1, 9)));
        assert!(!range.contains(date(2025, 1, 21)));

        let open = DateRange::default();
        assert!(open.is_unbounded());
        assert!(open.contains(date(1999, 12, 31)));
    }

    #[test]
    fn test_filter_sorts_newest_first_with_dateless_last() {
        let entries = vec![
            JournalEntry::new(date(2025, 1, 15), Mood::Okay, "mid"),
            dateless("nodate"),
            JournalEntry::new(date(2025, 1, 20), Mood::Okay, "new"),
            JournalEntry::new(date(2025, 1, 10), Mood::Okay, "old"),
        ];

        let listed = filter_entries(&entries, DateRange::default(), None);
        let contents: Vec<&str> = listed.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["new", "mid", "old", "nodate"]);
    }

    #[test]
    fn test_filter_with_range_drops_dateless() {
        let entries = vec![
            JournalEntry::new(date(2025, 1, 10), Mood::Okay, "old"),
            JournalEntry::new(date(2025, 1, 15), Mood::Okay, "mid"),
            JournalEntry::new(date(2025, 1, 20), Mood::Okay, "new"),
            dateless("nodate"),
        ];

        let range = DateRange::new(Some(date(2025, 1, 12)), None);
        let listed = filter_entries(&entries, range, None);
        let contents: Vec<&str> = listed.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["new", "mid"]);
    }

    #[test]
    fn test_filter_with_limit() {
        let entries = vec![
            JournalEntry::new(date(2025, 1, 15), Mood::Okay, "mid"),
            JournalEntry::new(date(2025, 1, 20), Mood::Okay, "new"),
            JournalEntry::new(date(2025, 1, 10), Mood::Okay, "old"),
        ];

        let listed = filter_entries(&entries, DateRange::default(), Some(2));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].content, "new");
        assert_eq!(listed[1].content, "mid");
    }
}
