//! Monthly Report
//!
//! Lists the expenses whose date text begins with a month string and sums
//! their amounts.

use crate::models::{ExpenseRecord, StoredRecord};

/// One line of a monthly report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyEntry {
    pub date: String,
    /// Missing amounts count as zero
    pub amount: f64,
    /// Missing categories show as empty
    pub category: String,
}

impl From<&ExpenseRecord> for MonthlyEntry {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.clone().unwrap_or_default(),
            amount: record.amount.unwrap_or(0.0),
            category: record.category.clone().unwrap_or_default(),
        }
    }
}

/// Expenses for a month, in stored order
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// The month text exactly as queried
    pub month: String,
    pub entries: Vec<MonthlyEntry>,
    pub total: f64,
}

impl MonthlyReport {
    /// Generate the report, or `None` when nothing matches the month
    ///
    /// Matching is a plain text prefix test on the date, so `"2024-1"`
    /// selects October through December 2024, not January.
    pub fn generate(records: &[StoredRecord], month: &str) -> Option<Self> {
        let entries: Vec<MonthlyEntry> = records
            .iter()
            .filter_map(StoredRecord::as_record)
            .filter(|r| r.date_starts_with(month))
            .map(MonthlyEntry::from)
            .collect();

        if entries.is_empty() {
            return None;
        }

        let total: f64 = entries.iter().map(|e| e.amount).sum();

        Some(Self {
            month: month.to_string(),
            entries,
            total,
        })
    }
}
