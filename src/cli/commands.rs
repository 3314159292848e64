//! CLI command definitions

use crate::domain::DEFAULT_WEEKLY_GOAL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reflectwell")]
#[command(about = "Mood journal with streaks and weekly goals", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Target number of journaling days per week (1-7)
        #[arg(short, long, default_value_t = DEFAULT_WEEKLY_GOAL)]
        goal: u32,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (goal, editor, created)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Write a new entry (opens the editor when no text is given)
    Add {
        /// Entry text
        text: Vec<String>,

        /// Mood (awful, bad, okay, good, great or 1-5)
        #[arg(short, long, default_value = "okay")]
        mood: String,

        /// Day of the entry (e.g., yesterday, last monday, 2025-01-17)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the current journaling streak
    Streak,

    /// Show this week's progress toward the weekly goal
    Progress {
        /// Use this goal instead of the configured one
        #[arg(short, long)]
        goal: Option<u32>,
    },

    /// Summarize moods over a date range
    Trends {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// Delete an entry by id (or unique id prefix)
    Delete {
        id: String,
    },
}
