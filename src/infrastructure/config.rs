//! Configuration management

use crate::domain::weekly::{DEFAULT_WEEKLY_GOAL, MAX_WEEKLY_GOAL, MIN_WEEKLY_GOAL};
use crate::error::{ReflectError, Result};
use crate::infrastructure::JOURNAL_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
    #[serde(default = "Config::detect_default_editor")]
    pub editor: String,
    pub created: DateTime<Utc>,
}

fn default_weekly_goal() -> u32 {
    DEFAULT_WEEKLY_GOAL
}

impl Config {
    /// Create a new config with the given weekly goal
    pub fn new(weekly_goal: u32) -> Self {
        Config {
            weekly_goal,
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Check that a weekly goal is a number of days in a week
    pub fn validate_goal(goal: u32) -> Result<u32> {
        if (MIN_WEEKLY_GOAL..=MAX_WEEKLY_GOAL).contains(&goal) {
            Ok(goal)
        } else {
            Err(ReflectError::Config(format!(
                "Invalid weekly goal: {}. Must be between {} and {}",
                goal, MIN_WEEKLY_GOAL, MAX_WEEKLY_GOAL
            )))
        }
    }

    /// Parse and validate a weekly goal from user input
    pub fn parse_goal(value: &str) -> Result<u32> {
        let goal = value.trim().parse::<u32>().map_err(|_| {
            ReflectError::Config(format!("Invalid weekly goal: '{}' is not a number", value))
        })?;
        Self::validate_goal(goal)
    }

    /// Load config from .reflectwell/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReflectError::NotJournalDirectory(path.to_path_buf())
            } else {
                ReflectError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ReflectError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .reflectwell/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}
