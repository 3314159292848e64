//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod editor;
pub mod repository;
pub mod store;

/// Directory marking a journal root
pub const JOURNAL_DIR: &str = ".reflectwell";

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use editor::EditorSession;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{EntryStore, StoredEntry};
