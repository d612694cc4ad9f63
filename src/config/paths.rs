//! Path management for the expense tracker
//!
//! The data file comes from the `--data-file` flag, which falls back to the
//! `EXPENSE_TRACKER_DATA_FILE` environment variable and then to
//! `expenses.json` in the current working directory.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_DATA_FILE";

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Location of the persisted expense collection
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Create TrackerPaths pointing at a specific data file
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the expense data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mine.json");
        let paths = TrackerPaths::with_data_file(&path);

        assert_eq!(paths.data_file(), path.as_path());
    }

    #[test]
    fn test_relative_default() {
        let paths = TrackerPaths::with_data_file(DEFAULT_DATA_FILE);
        assert_eq!(paths.data_file(), Path::new("expenses.json"));
    }
}
