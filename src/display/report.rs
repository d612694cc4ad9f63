//! Report formatting utilities for terminal output

use crate::reports::{CategoryReport, MonthlyEntry, MonthlyReport};

/// Format an amount the way it is entered: whole numbers keep one decimal
/// place (`10.0`), everything else uses the shortest exact form (`12.5`)
///
/// Magnitudes of `1e16` and above, or below `1e-4`, switch to exponent
/// form with a signed, two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return format!("{}", amount);
    }

    let magnitude = amount.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(amount);
    }

    if amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

fn format_exponent(amount: f64) -> String {
    let shortest = format!("{:e}", amount);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Format one expense line of a monthly report
pub fn format_monthly_entry(entry: &MonthlyEntry) -> String {
    format!(
        "{}: {} ({})",
        entry.date,
        format_amount(entry.amount),
        entry.category
    )
}

/// Format the monthly view, including the "nothing found" case
pub fn format_monthly_report(month: &str, report: Option<&MonthlyReport>) -> String {
    let Some(report) = report else {
        return format!("No expenses found for {}", month);
    };

    let mut lines = Vec::with_capacity(report.entries.len() + 2);
    lines.push(format!("Monthly Expenses for {}", report.month));
    lines.extend(report.entries.iter().map(format_monthly_entry));
    lines.push(format!(
        "Total Expenses for {} : {}",
        report.month,
        format_amount(report.total)
    ));
    lines.join("\n")
}

/// Format category-wise totals; the header is printed even when empty
pub fn format_category_report(report: &CategoryReport) -> String {
    let mut lines = vec!["Category-wise Expenditure".to_string()];
    lines.extend(
        report
            .totals
            .iter()
            .map(|t| format!("{}: {}", t.category, format_amount(t.total))),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::CategoryTotal;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.0), "10.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.1), "0.1");
        assert_eq!(format_amount(0.0001), "0.0001");
        assert_eq!(format_amount(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_amount_exponent_form() {
        assert_eq!(format_amount(1e16), "1e+16");
        assert_eq!(format_amount(1.5e16), "1.5e+16");
        assert_eq!(format_amount(1e100), "1e+100");
        assert_eq!(format_amount(1e-5), "1e-05");
        assert_eq!(format_amount(1.5e-5), "1.5e-05");
        assert_eq!(format_amount(-2e20), "-2e+20");
    }

    #[test]
    fn test_format_monthly_report() {
        let report = MonthlyReport {
            month: "2024-03".into(),
            entries: vec![
                MonthlyEntry {
                    date: "2024-03-01".into(),
                    amount: 10.0,
                    category: "Food".into(),
                },
                MonthlyEntry {
                    date: "2024-03-15".into(),
                    amount: 2.5,
                    category: "Transportation".into(),
                },
            ],
            total: 12.5,
        };

        assert_eq!(
            format_monthly_report("2024-03", Some(&report)),
            "Monthly Expenses for 2024-03\n\
             2024-03-01: 10.0 (Food)\n\
             2024-03-15: 2.5 (Transportation)\n\
             Total Expenses for 2024-03 : 12.5"
        );
    }

    #[test]
    fn test_format_monthly_none() {
        assert_eq!(
            format_monthly_report("2023-01", None),
            "No expenses found for 2023-01"
        );
    }

    #[test]
    fn test_format_category_report() {
        let report = CategoryReport {
            totals: vec![
                CategoryTotal {
                    category: "Food".into(),
                    total: 15.0,
                },
                CategoryTotal {
                    category: "Transportation".into(),
                    total: 3.0,
                },
            ],
        };

        assert_eq!(
            format_category_report(&report),
            "Category-wise Expenditure\nFood: 15.0\nTransportation: 3.0"
        );
        assert_eq!(
            format_category_report(&CategoryReport::default()),
            "Category-wise Expenditure"
        );
    }
}
