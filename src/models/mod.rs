//! Core data models for the expense tracker
//!
//! This module contains the expense record in its strict and lenient forms
//! and the validators used when a new expense is entered.

pub mod expense;
pub mod validation;

pub use expense::{Expense, ExpenseRecord, StoredRecord};
pub use validation::ExpenseValidationError;
