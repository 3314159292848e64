//! Delete entry use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

pub struct DeleteEntryService {
    repository: FileSystemRepository,
}

impl DeleteEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DeleteEntryService { repository }
    }

    /// Remove the entry identified by a full id or a unique id prefix
    pub fn execute(&self, id: &str) -> Result<JournalEntry> {
        let removed = self.repository.remove_entry(id)?;
        tracing::info!(id = %removed.id, "entry deleted");
        Ok(removed)
    }
}
