//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and lenient reads.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json_lenient, write_json_atomic};

use crate::config::paths::TrackerPaths;

/// Storage coordinator that owns the repositories
///
/// Nothing touches the filesystem until the first load or save.
pub struct Storage {
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance for the configured data file
    pub fn new(paths: &TrackerPaths) -> Self {
        Self {
            expenses: ExpenseStore::new(paths.data_file()),
        }
    }
}
