//! Display formatting for terminal output

pub mod report;

pub use report::{format_amount, format_category_report, format_monthly_report};
