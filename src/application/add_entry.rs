//! Add entry use case

use crate::domain::{JournalEntry, Mood, TimeReference};
use crate::error::{ReflectError, Result};
use crate::infrastructure::{Clock, EditorSession, FileSystemRepository, JournalRepository};
use std::fs;

/// What the user asked to record
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    /// Entry text; `None` opens the editor
    pub text: Option<String>,
    pub mood: Mood,
    /// Time reference for the entry day; `None` is today
    pub date: Option<String>,
}

/// Service for writing new entries
pub struct AddEntryService {
    repository: FileSystemRepository,
}

impl AddEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddEntryService { repository }
    }

    pub fn execute(&self, request: NewEntry, clock: &dyn Clock) -> Result<JournalEntry> {
        let today = clock.today();
        let date = match request.date.as_deref() {
            Some(reference) => TimeReference::parse(reference)?.resolve(today),
            None => today,
        };

        let content = match request.text {
            Some(text) => text,
            None => self.compose_in_editor()?,
        };
        let content = content.trim();
        if content.is_empty() {
            return Err(ReflectError::EmptyEntry);
        }

        let entry = JournalEntry::new(date, request.mood, content);
        self.repository.add_entry(&entry)?;

        tracing::info!(id = %entry.id, %date, mood = %entry.mood, "entry added");
        Ok(entry)
    }

    /// Let the user write the entry in their editor via a draft file
    fn compose_in_editor(&self) -> Result<String> {
        let config = self.repository.load_config()?;
        let draft = self.repository.draft_path();
        fs::write(&draft, "")?;

        let edited = EditorSession::new(config.get_editor())
            .edit(&draft)
            .and_then(|_| fs::read_to_string(&draft).map_err(ReflectError::Io));

        if let Err(e) = fs::remove_file(&draft) {
            tracing::warn!(error = %e, draft = %draft.display(), "could not remove draft");
        }

        edited
    }
}
