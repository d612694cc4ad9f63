//! File I/O utilities with atomic writes
//!
//! Reads are forgiving: a missing file or undecodable content both come back
//! as `None`, leaving the caller to decide what "no data" means. Writes go
//! through a temp file and a rename so a crash never leaves half a file.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::TrackerError;

/// Read a file as JSON, returning `None` if it is missing or not valid JSON
///
/// Bytes that are not UTF-8 count as invalid JSON. Any other I/O failure
/// (permissions, a directory in the way) is an error.
pub fn read_json_lenient<P: AsRef<Path>>(path: P) -> Result<Option<Value>, TrackerError> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("{} does not exist yet", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(TrackerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("Ignoring undecodable data in {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either fully replaced or left as it was. The temp file is
/// removed whenever any step fails.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let result = write_temp_file(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| TrackerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Serialize into `temp_path` and sync it to disk
fn write_temp_file<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), TrackerError> {
    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))
}
