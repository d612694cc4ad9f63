//! Service layer for the expense tracker
//!
//! Business logic sits between the CLI and the storage layer.

pub mod expense;

pub use expense::ExpenseService;
