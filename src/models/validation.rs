//! Field validators for new expenses
//!
//! Each validator takes the raw text a user typed and either returns the
//! cleaned value or the message to show before asking again.

use chrono::NaiveDate;
use std::fmt;

use crate::config::Settings;

/// Why a piece of user input was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    InvalidDate(String),
    InvalidAmount(String),
    NegativeAmount,
    InvalidCategory { allowed: String },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(_) => write!(f, "Invalid date format. Please use YYYY-MM-DD."),
            Self::InvalidAmount(_) => write!(f, "Invalid amount. Please enter a valid number."),
            Self::NegativeAmount => write!(f, "Amount cannot be negative."),
            Self::InvalidCategory { allowed } => {
                write!(f, "Invalid category. Please select from {}", allowed)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Validate a `YYYY-MM-DD` calendar date, returning it as typed
///
/// The year must be exactly four digits. Month and day take one or two
/// digits, so `2024-3-1` is accepted and stored unpadded.
pub fn validate_date(input: &str) -> Result<String, ExpenseValidationError> {
    let trimmed = input.trim();
    let invalid = || ExpenseValidationError::InvalidDate(trimmed.to_string());

    let mut parts = trimmed.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let year = parse_digits(year, 4..=4).ok_or_else(invalid)?;
    let month = parse_digits(month, 1..=2).ok_or_else(invalid)?;
    let day = parse_digits(day, 1..=2).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)?;
    Ok(trimmed.to_string())
}

/// Parse an unsigned run of ASCII digits whose length is within `len`
fn parse_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Validate a non-negative, finite amount
pub fn validate_amount(input: &str) -> Result<f64, ExpenseValidationError> {
    let trimmed = input.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ExpenseValidationError::InvalidAmount(trimmed.to_string()))?;

    if !amount.is_finite() {
        return Err(ExpenseValidationError::InvalidAmount(trimmed.to_string()));
    }
    if amount < 0.0 {
        return Err(ExpenseValidationError::NegativeAmount);
    }

    // "-0" parses to negative zero; store it as plain zero
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

/// Trim and title-case a category, then check it against the allowed set
pub fn normalize_category(
    input: &str,
    settings: &Settings,
) -> Result<String, ExpenseValidationError> {
    let category = title_case(input.trim());
    if settings.is_valid_category(&category) {
        Ok(category)
    } else {
        Err(ExpenseValidationError::InvalidCategory {
            allowed: settings.category_list(),
        })
    }
}

/// Uppercase the first letter of every word and lowercase the rest
///
/// A word is a run of alphabetic characters; anything else separates words.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        assert_eq!(validate_date("2024-03-15").unwrap(), "2024-03-15");
        assert_eq!(validate_date("2024-02-29\n").unwrap(), "2024-02-29");
    }

    #[test]
    fn test_unpadded_date_kept_as_typed() {
        assert_eq!(validate_date("2024-3-1").unwrap(), "2024-3-1");
    }

    #[test]
    fn test_invalid_dates() {
        let inputs = [
            "",
            "not a date",
            "2024-02-30",
            "2023-02-29",
            "2024-13-01",
            "15/03/2024",
            "99-01-01",
            "+2024-03-01",
            "2024-03-01-",
            "2024--03-01",
            "2024-003-01",
            "2024-03-1x",
        ];
        for input in inputs {
            assert!(
                matches!(validate_date(input), Err(ExpenseValidationError::InvalidDate(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_amounts() {
        assert_eq!(validate_amount("12.5").unwrap(), 12.5);
        assert_eq!(validate_amount(" 10 ").unwrap(), 10.0);
        assert_eq!(validate_amount("0").unwrap(), 0.0);
        assert!(validate_amount("-0").unwrap().is_sign_positive());
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            validate_amount("-1"),
            Err(ExpenseValidationError::NegativeAmount)
        );
        assert_eq!(
            validate_amount("-0.01"),
            Err(ExpenseValidationError::NegativeAmount)
        );
    }

    #[test]
    fn test_unparseable_amount_rejected() {
        for input in ["", "abc", "12,50", "NaN", "inf"] {
            assert!(
                matches!(validate_amount(input), Err(ExpenseValidationError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_category_normalization() {
        let settings = Settings::default();
        assert_eq!(normalize_category("food", &settings).unwrap(), "Food");
        assert_eq!(
            normalize_category("  TRANSPORTATION ", &settings).unwrap(),
            "Transportation"
        );
        assert_eq!(
            normalize_category("eNtErTaInMeNt", &settings).unwrap(),
            "Entertainment"
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = normalize_category("rent", &Settings::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid category. Please select from Food, Transportation, Entertainment, Miscellaneous"
        );
    }

    #[test]
    fn test_alternate_category_set() {
        let settings = Settings::with_categories(["Rent"]);
        assert_eq!(normalize_category("rent", &settings).unwrap(), "Rent");
        assert!(normalize_category("food", &settings).is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("food"), "Food");
        assert_eq!(title_case("FOOD"), "Food");
        assert_eq!(title_case("dining out"), "Dining Out");
        assert_eq!(title_case("self-care"), "Self-Care");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExpenseValidationError::InvalidDate("x".into()).to_string(),
            "Invalid date format. Please use YYYY-MM-DD."
        );
        assert_eq!(
            ExpenseValidationError::InvalidAmount("x".into()).to_string(),
            "Invalid amount. Please enter a valid number."
        );
    }
}
