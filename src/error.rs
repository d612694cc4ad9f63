//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Data file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input reached end of stream
    #[error("Input stream closed")]
    InputClosed,
}

impl TrackerError {
    /// Check if input ran out while prompting
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
