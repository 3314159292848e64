//! Config management use case

use crate::error::{ReflectError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "goal" => Ok(config.weekly_goal.to_string()),
            "editor" => Ok(config.editor.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ReflectError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: goal, editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "goal" => {
                config.weekly_goal = Config::parse_goal(value)?;
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(ReflectError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ReflectError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: goal, editor",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
