//! Expense repository for JSON storage
//!
//! The whole collection is read on every load and rewritten on every save.
//! Nothing is cached between operations.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::TrackerError;
use crate::models::StoredRecord;

use super::file_io::{read_json_lenient, write_json_atomic};

/// Repository for the persisted expense collection
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a new expense store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection in stored order
    ///
    /// A missing file, unparseable JSON, or a top-level value that is not an
    /// array all load as an empty collection.
    pub fn load(&self) -> Result<Vec<StoredRecord>, TrackerError> {
        log::debug!("Loading expenses from {}", self.path.display());

        let items = match read_json_lenient(&self.path)? {
            Some(Value::Array(items)) => items,
            Some(other) => {
                log::warn!(
                    "Expected a list of expenses in {}, found {}; treating as empty",
                    self.path.display(),
                    json_kind(&other)
                );
                return Ok(Vec::new());
            }
            None => return Ok(Vec::new()),
        };

        let records: Vec<StoredRecord> = items.into_iter().map(StoredRecord::from).collect();

        let raw = records.iter().filter(|r| r.as_record().is_none()).count();
        if raw > 0 {
            log::warn!(
                "{} of {} entries in {} are not objects and will be ignored",
                raw,
                records.len(),
                self.path.display()
            );
        }

        Ok(records)
    }

    /// Overwrite the backing file with the full collection
    pub fn save(&self, records: &[StoredRecord]) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, &records)?;
        log::info!(
            "Saved {} expense records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
