//! Configuration module for the expense tracker
//!
//! This module provides:
//! - Data file path resolution
//! - The configurable category set

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;

/// Everything the store and the workflows need to know about their environment
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub paths: TrackerPaths,
    pub settings: Settings,
}

impl TrackerConfig {
    pub fn new(paths: TrackerPaths, settings: Settings) -> Self {
        Self { paths, settings }
    }
}
