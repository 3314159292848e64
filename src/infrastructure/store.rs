//! JSON entry store
//!
//! Entries live in `.reflectwell/entries.json` as a JSON array. The `date`
//! field is kept exactly as it was found so that rewriting the file never
//! loses data, and is normalized to a calendar date only when records are
//! turned into [`JournalEntry`] values.

use crate::domain::{normalize_date, JournalEntry, Mood, RawEntryDate};
use crate::error::Result;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// One entry as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: Uuid,
    #[serde(default)]
    pub date: Option<Value>,
    pub mood: Mood,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredEntry {
    /// Build the persisted form of a new entry. Dates are written as
    /// `YYYY-MM-DD` strings.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        StoredEntry {
            id: entry.id,
            date: entry
                .date
                .map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
            mood: entry.mood,
            content: entry.content.clone(),
            created_at: entry.created_at,
        }
    }

    /// Decode the date field, if it has one of the known shapes
    pub fn raw_date(&self) -> Option<RawEntryDate> {
        let value = self.date.as_ref()?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Convert to the in-memory form, resolving the date in `tz`
    pub fn to_entry<Tz: TimeZone>(&self, tz: &Tz) -> JournalEntry {
        JournalEntry {
            id: self.id,
            date: self.raw_date().and_then(|raw| normalize_date(&raw, tz)),
            mood: self.mood,
            content: self.content.clone(),
            created_at: self.created_at,
        }
    }
}

/// File holding every stored entry of a journal
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: PathBuf) -> Self {
        EntryStore { path }
    }

    /// Read all records. A missing file is an empty journal.
    pub fn load(&self) -> Result<Vec<StoredEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<StoredEntry> = serde_json::from_str(&contents)?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded entries");
        Ok(records)
    }

    /// Replace the file contents: write to a temp file in the same
    /// directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    pub fn save(&self, records: &[StoredEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(records)?;

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "saved entries");
        Ok(())
    }
}
