//! List entries use case

use crate::domain::{filter_entries, DateRange, JournalEntry, TimeReference};
use crate::error::{ReflectError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Turn optional `--from`/`--to` time references into a date range.
pub fn resolve_range(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> Result<DateRange> {
    let resolve = |reference: Option<&str>| -> Result<Option<NaiveDate>> {
        reference
            .map(|r| TimeReference::parse(r).map(|t| t.resolve(today)))
            .transpose()
    };

    let range = DateRange::new(resolve(from)?, resolve(to)?);
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(ReflectError::Config(format!(
                "Invalid date range: {} is after {}",
                from.format("%d-%m-%Y"),
                to.format("%d-%m-%Y")
            )));
        }
    }

    Ok(range)
}

/// Service for browsing the journal history
pub struct ListEntriesService {
    repository: FileSystemRepository,
}

impl ListEntriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListEntriesService { repository }
    }

    /// Entries inside `range`, newest first
    pub fn execute(&self, range: DateRange, limit: Option<usize>) -> Result<Vec<JournalEntry>> {
        let entries = self.repository.load_entries()?;
        Ok(filter_entries(&entries, range, limit))
    }
}
