//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository, JOURNAL_DIR};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Initialize a new journal at the specified path.
    pub fn execute(path: &Path, weekly_goal: u32) -> Result<Config> {
        let weekly_goal = Config::validate_goal(weekly_goal)?;

        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        let config = Config::new(weekly_goal);
        create_journal(&repo, &config)?;

        tracing::info!(root = %path.display(), weekly_goal, "initialized journal");
        Ok(config)
    }
}

/// Create the journal directory and write its config. A half-created
/// journal directory is removed again so init can be retried.
fn create_journal<R: JournalRepository>(repo: &R, config: &Config) -> Result<()> {
    repo.initialize()?;

    if let Err(e) = repo.save_config(config) {
        let journal_dir = repo.root().join(JOURNAL_DIR);
        if let Err(cleanup) = fs::remove_dir_all(&journal_dir) {
            tracing::warn!(
                path = %journal_dir.display(),
                error = %cleanup,
                "could not remove partially initialized journal"
            );
        }
        return Err(e);
    }

    Ok(())
}
