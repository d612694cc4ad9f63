//! Category Report
//!
//! Totals every expense by category, in the order each category first
//! appears in the collection.

use std::collections::HashMap;

use crate::models::StoredRecord;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Category-wise totals over the whole collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryReport {
    /// Only categories with at least one contributing record, first-seen order
    pub totals: Vec<CategoryTotal>,
}

impl CategoryReport {
    /// Generate the report
    ///
    /// Records without both a category and an amount are skipped.
    pub fn generate(records: &[StoredRecord]) -> Self {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in records.iter().filter_map(StoredRecord::as_record) {
            let (Some(category), Some(amount)) = (record.category.as_deref(), record.amount) else {
                continue;
            };

            let slot = *index.entry(category).or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: category.to_string(),
                    total: 0.0,
                });
                totals.len() - 1
            });

            totals[slot].total += amount;
        }

        Self { totals }
    }
}
