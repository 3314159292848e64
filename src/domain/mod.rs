//! Domain layer - Business logic and domain models

pub mod entry;
pub mod mood;
pub mod normalize;
pub mod streak;
pub mod time_ref;
pub mod trends;
pub mod weekly;

pub use entry::{filter_entries, DateRange, JournalEntry};
pub use mood::Mood;
pub use normalize::{normalize_date, RawEntryDate};
pub use streak::compute_streak;
pub use time_ref::TimeReference;
pub use trends::MoodSummary;
pub use weekly::{compute_weekly_progress, week_bounds, WeeklyProgress, DEFAULT_WEEKLY_GOAL};
