//! Error types for reflectwell

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the reflectwell application
#[derive(Debug, Error)]
pub enum ReflectError {
    #[error("Not a reflectwell journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Entry is empty, nothing saved")]
    EmptyEntry,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Entry store error: {0}")]
    Store(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ReflectError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReflectError::NotJournalDirectory(_) => 2,
            ReflectError::InvalidTimeReference(_) => 3,
            ReflectError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReflectError::NotJournalDirectory(path) => {
                format!(
                    "Not a reflectwell journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'reflectwell init' in this directory to create a new journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set REFLECTWELL_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ReflectError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    reflectwell add --date yesterday\n\
                    reflectwell list --from 'last monday'",
                    ref_str
                )
            }
            ReflectError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'reflectwell list' to see entry ids",
                    id
                )
            }
            ReflectError::InvalidMood(mood) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods: awful, bad, okay, good, great (or 1-5)",
                    mood
                )
            }
            ReflectError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: reflectwell config editor 'vim'\n\
                    • Pass the entry text directly: reflectwell add 'Today was good'",
                    msg
                )
            }
            ReflectError::Config(msg) => {
                if msg.contains("goal") {
                    format!(
                        "{}\n\n\
                        The weekly goal is a number of days between 1 and 7\n\
                        Example: reflectwell config goal 4",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReflectError
pub type Result<T> = std::result::Result<T, ReflectError>;
