//! Streak, weekly progress and mood trend use cases

use crate::domain::{
    compute_streak, compute_weekly_progress, DateRange, MoodSummary, WeeklyProgress,
};
use crate::error::Result;
use crate::infrastructure::{Clock, FileSystemRepository, JournalRepository};

/// Service computing journaling statistics from the stored entries
pub struct StatsService {
    repository: FileSystemRepository,
}

impl StatsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        StatsService { repository }
    }

    /// Current consecutive-day streak
    pub fn streak(&self, clock: &dyn Clock) -> Result<u32> {
        let entries = self.repository.load_entries()?;
        let streak = compute_streak(&entries, clock.today());
        tracing::debug!(streak, entries = entries.len(), "computed streak");
        Ok(streak)
    }

    /// Distinct journaling days this week against the configured goal,
    /// or against `goal_override` when given
    pub fn weekly_progress(
        &self,
        clock: &dyn Clock,
        goal_override: Option<u32>,
    ) -> Result<WeeklyProgress> {
        let goal = match goal_override {
            Some(goal) => goal,
            None => self.repository.load_config()?.weekly_goal,
        };
        let entries = self.repository.load_entries()?;
        let progress = compute_weekly_progress(&entries, &clock.now(), goal);
        tracing::debug!(?progress, "computed weekly progress");
        Ok(progress)
    }

    /// Mood counts inside `range`
    pub fn trends(&self, range: DateRange) -> Result<MoodSummary> {
        let entries = self.repository.load_entries()?;
        Ok(MoodSummary::from_entries(&entries, range))
    }
}
