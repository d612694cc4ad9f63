//! Reports module
//!
//! Aggregate views computed fresh from the loaded collection:
//! - Monthly Report: expenses and total for one month
//! - Category Report: totals per category

pub mod category;
pub mod monthly;

pub use category::{CategoryReport, CategoryTotal};
pub use monthly::{MonthlyEntry, MonthlyReport};
