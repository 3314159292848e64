//! reflectwell - Terminal mood journal
//!
//! Write dated journal entries tagged with a mood, browse the history, and
//! keep track of the current writing streak and progress toward a weekly
//! goal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReflectError;
