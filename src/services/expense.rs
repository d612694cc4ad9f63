//! Expense service
//!
//! Ties the store to the reports: every call loads the collection fresh,
//! and adding an expense rewrites the whole file.

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{Expense, StoredRecord};
use crate::reports::{CategoryReport, MonthlyReport};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// The settings this service validates against
    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Append an expense and persist the whole collection
    pub fn add(&self, expense: Expense) -> TrackerResult<()> {
        let mut records = self.storage.expenses.load()?;
        log::debug!("Adding expense {} to {} existing records", expense, records.len());

        records.push(StoredRecord::from(expense));
        self.storage.expenses.save(&records)
    }

    /// Expenses for a month, or `None` if there are none
    pub fn monthly_report(&self, month: &str) -> TrackerResult<Option<MonthlyReport>> {
        let records = self.storage.expenses.load()?;
        Ok(MonthlyReport::generate(&records, month))
    }

    /// Totals per category over every expense
    pub fn category_report(&self) -> TrackerResult<CategoryReport> {
        let records = self.storage.expenses.load()?;
        Ok(CategoryReport::generate(&records))
    }
}
