//! Expense models
//!
//! `Expense` is the strict record produced by the add workflow. What comes
//! back from disk is modeled more loosely: the file may have been edited by
//! hand, so every field of an `ExpenseRecord` is optional and elements that
//! are not JSON objects at all are kept as raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A validated expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date in `YYYY-MM-DD` form
    pub date: String,

    /// Non-negative amount, no currency attached
    pub amount: f64,

    /// Free-form description
    pub description: String,

    /// One of the configured category names
    pub category: String,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.amount, self.description, self.category
        )
    }
}

/// An expense as loaded from disk, with every field optional
///
/// A known key holding the wrong JSON type reads as absent. Its value stays
/// in `extra`, next to any keys this crate does not know about, so that
/// rewriting the file does not drop it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExpenseRecord {
    /// Whether the record's date starts with the given text
    pub fn date_starts_with(&self, prefix: &str) -> bool {
        self.date.as_deref().is_some_and(|d| d.starts_with(prefix))
    }
}

/// Move `key` out of `map` if it holds a string
fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::String(s) => Some(s),
        other => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

/// Move `key` out of `map` if it holds a number
fn take_number(map: &mut Map<String, Value>, key: &str) -> Option<f64> {
    match map.remove(key)? {
        Value::Number(n) => n.as_f64(),
        other => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

impl From<Map<String, Value>> for ExpenseRecord {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            date: take_string(&mut map, "date"),
            amount: take_number(&mut map, "amount"),
            description: take_string(&mut map, "description"),
            category: take_string(&mut map, "category"),
            extra: map,
        }
    }
}

impl From<Expense> for ExpenseRecord {
    fn from(expense: Expense) -> Self {
        Self {
            date: Some(expense.date),
            amount: Some(expense.amount),
            description: Some(expense.description),
            category: Some(expense.category),
            extra: Map::new(),
        }
    }
}

/// One element of the persisted array
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredRecord {
    /// Any JSON object, read field by field
    Expense(ExpenseRecord),
    /// Anything else, carried through untouched
    Raw(Value),
}

impl StoredRecord {
    /// The expense view of this element, if it has one
    pub fn as_record(&self) -> Option<&ExpenseRecord> {
        match self {
            Self::Expense(record) => Some(record),
            Self::Raw(_) => None,
        }
    }
}

impl From<Value> for StoredRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Expense(map.into()),
            other => Self::Raw(other),
        }
    }
}

impl<'de> Deserialize<'de> for StoredRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<Expense> for StoredRecord {
    fn from(expense: Expense) -> Self {
        Self::Expense(expense.into())
    }
}
