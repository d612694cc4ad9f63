//! Interactive numbered menu
//!
//! Runs until the user picks Quit or the input stream ends.

use std::io::{BufRead, Write};

use crate::display::{format_category_report, format_monthly_report};
use crate::error::TrackerResult;
use crate::models::validation::{normalize_category, validate_amount, validate_date};
use crate::models::Expense;
use crate::services::ExpenseService;

use super::prompt::{prompt_string, prompt_until};

/// A top-level menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewMonth,
    ViewCategories,
    Quit,
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt; only the exact digits match
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewMonth),
            "3" => Some(Self::ViewCategories),
            "4" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> TrackerResult<()> {
    writeln!(output)?;
    writeln!(output, "Expense Tracker")?;
    writeln!(output, "1. Add Expense")?;
    writeln!(output, "2. View Expenses")?;
    writeln!(output, "3. View Category-wise Expenditure")?;
    writeln!(output, "4. Quit")?;
    Ok(())
}

/// Run the menu loop
pub fn run_menu<R, W>(service: &ExpenseService<'_>, input: &mut R, output: &mut W) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        print_menu(output)?;

        let result = match prompt_string(input, output, "Enter your choice: ") {
            Ok(choice) => match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddExpense) => add_expense(service, input, output),
                Some(MenuChoice::ViewMonth) => view_month(service, input, output),
                Some(MenuChoice::ViewCategories) => view_categories(service, output),
                Some(MenuChoice::Quit) => return Ok(()),
                None => {
                    writeln!(output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            },
            Err(e) => Err(e),
        };

        match result {
            Err(e) if e.is_input_closed() => {
                log::debug!("Input closed, leaving menu");
                writeln!(output)?;
                return Ok(());
            }
            other => other?,
        }
    }
}

/// Prompt for every field of a new expense, then save it
pub fn add_expense<R, W>(service: &ExpenseService<'_>, input: &mut R, output: &mut W) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
{
    let settings = service.settings();

    let date = prompt_until(input, output, "Enter date (YYYY-MM-DD): ", validate_date)?;
    let amount = prompt_until(input, output, "Enter amount: ", validate_amount)?;
    let description = prompt_string(input, output, "Enter description: ")?;

    let category_prompt = format!("Enter category ({}): ", settings.category_list());
    let category = prompt_until(input, output, &category_prompt, |s| {
        normalize_category(s, settings)
    })?;

    service.add(Expense {
        date,
        amount,
        description,
        category,
    })
}

/// Prompt for a month and print its expenses
pub fn view_month<R, W>(service: &ExpenseService<'_>, input: &mut R, output: &mut W) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
{
    let month = prompt_string(input, output, "Enter month (YYYY-MM): ")?;
    let report = service.monthly_report(&month)?;
    writeln!(output, "{}", format_monthly_report(&month, report.as_ref()))?;
    Ok(())
}

/// Print category-wise totals
pub fn view_categories<W: Write>(service: &ExpenseService<'_>, output: &mut W) -> TrackerResult<()> {
    let report = service.category_report()?;
    writeln!(output, "{}", format_category_report(&report))?;
    Ok(())
}
