//! Expense Tracker - terminal-based personal expense logging
//!
//! Records dated expenses with a description and one of a fixed set of
//! categories, keeps them in a JSON file, and reports totals per month and
//! per category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location and the category set
//! - `error`: Custom error types
//! - `models`: Expense records and input validation
//! - `storage`: JSON file storage layer
//! - `reports`: Monthly and category aggregation
//! - `services`: Business logic layer
//! - `display`: Text rendering of reports
//! - `cli`: Interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(&TrackerPaths::with_data_file("expenses.json"));
//! let settings = Settings::default();
//! let service = ExpenseService::new(&storage, &settings);
//! let report = service.category_report()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
