//! File system repository

use crate::domain::JournalEntry;
use crate::error::{ReflectError, Result};
use crate::infrastructure::store::{EntryStore, StoredEntry};
use crate::infrastructure::{Config, JOURNAL_DIR};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "REFLECTWELL_ROOT";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .reflectwell/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .reflectwell/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .reflectwell directory exists
    fn is_initialized(&self) -> bool;

    /// Create .reflectwell directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks REFLECTWELL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                tracing::debug!(root = %path.display(), "journal root from {}", ROOT_ENV);
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ReflectError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'reflectwell init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    JOURNAL_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let found = start
            .ancestors()
            .find(|dir| Self::has_journal_dir(dir))
            .ok_or_else(|| ReflectError::NotJournalDirectory(start.to_path_buf()))?;

        tracing::debug!(root = %found.display(), "discovered journal root");
        Ok(FileSystemRepository::new(found.to_path_buf()))
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    fn entry_store(&self) -> EntryStore {
        EntryStore::new(self.root().join(JOURNAL_DIR).join("entries.json"))
    }

    /// Path of the scratch file used when composing an entry in an editor
    pub fn draft_path(&self) -> PathBuf {
        self.root().join(JOURNAL_DIR).join("DRAFT.md")
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(ReflectError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(JOURNAL_DIR))?;
        Ok(())
    }
}

// Entry operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Load every entry, with dates resolved in the local time zone
    pub fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let records = self.entry_store().load()?;
        let entries: Vec<JournalEntry> = records.iter().map(|r| r.to_entry(&Local)).collect();

        let dateless = entries.iter().filter(|e| e.date.is_none()).count();
        if dateless > 0 {
            tracing::warn!(dateless, "entries without a readable date are left out of statistics");
        }

        Ok(entries)
    }

    /// Append a new entry to the store
    pub fn add_entry(&self, entry: &JournalEntry) -> Result<()> {
        let store = self.entry_store();
        let mut records = store.load()?;
        records.push(StoredEntry::from_entry(entry));
        store.save(&records)
    }

    /// Remove the entry whose id starts with `id_prefix`.
    /// The prefix must select exactly one entry.
    pub fn remove_entry(&self, id_prefix: &str) -> Result<JournalEntry> {
        let needle = id_prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ReflectError::EntryNotFound(id_prefix.to_string()));
        }

        let store = self.entry_store();
        let mut records = store.load()?;

        let matches: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id.to_string().starts_with(&needle))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(ReflectError::EntryNotFound(id_prefix.to_string())),
            [index] => {
                let removed = records.remove(*index);
                store.save(&records)?;
                Ok(removed.to_entry(&Local))
            }
            _ => Err(ReflectError::Config(format!(
                "Entry id '{}' is ambiguous ({} matches). Use more characters.",
                id_prefix,
                matches.len()
            ))),
        }
    }
}
