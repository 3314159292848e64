//! Mood trends over a date range

use crate::domain::entry::{DateRange, JournalEntry};
use crate::domain::Mood;

/// How often each mood was recorded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodSummary {
    /// Indexed by `Mood::rank() - 1`
    counts: [usize; 5],
}

impl MoodSummary {
    /// Summarize the dated entries that fall inside `range`.
    pub fn from_entries(entries: &[JournalEntry], range: DateRange) -> Self {
        let mut summary = MoodSummary::default();
        for entry in entries {
            if entry.date.is_some_and(|d| range.contains(d)) {
                summary.counts[usize::from(entry.mood.rank()) - 1] += 1;
            }
        }
        summary
    }

    pub fn count(&self, mood: Mood) -> usize {
        self.counts[usize::from(mood.rank()) - 1]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Mean mood rank (1.0 to 5.0), `None` when nothing was recorded
    pub fn average(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: usize = Mood::ALL
            .iter()
            .map(|m| usize::from(m.rank()) * self.count(*m))
            .sum();
        Some(weighted as f64 / total as f64)
    }

    /// Most frequent mood; ties go to the better mood
    pub fn dominant(&self) -> Option<Mood> {
        Mood::ALL
            .iter()
            .copied()
            .filter(|m| self.count(*m) > 0)
            .max_by_key(|m| (self.count(*m), *m))
    }
}
