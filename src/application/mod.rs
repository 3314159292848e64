//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod stats;

pub use add_entry::{AddEntryService, NewEntry};
pub use delete_entry::DeleteEntryService;
pub use init::InitService;
pub use list_entries::{resolve_range, ListEntriesService};
pub use manage_config::ConfigService;
pub use stats::StatsService;
