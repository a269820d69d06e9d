//! CLI commands for BudgetBook
//!
//! Each entity gets its own subcommand enum and handler. Argument parsing
//! helpers translate user strings into domain types, surfacing malformed
//! input as `InvalidArgument` instead of guessing.

pub mod budget;
pub mod category;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{BudgetBookError, BudgetBookResult};
use crate::models::{Money, MonthKey};

/// Parse an optional month argument, defaulting to the current month
pub fn parse_month(month: Option<&str>) -> BudgetBookResult<MonthKey> {
    match month {
        Some(s) => MonthKey::parse(s).map_err(|e| BudgetBookError::InvalidArgument(e.to_string())),
        None => Ok(MonthKey::current()),
    }
}

/// Parse a money amount argument
pub fn parse_amount(amount: &str) -> BudgetBookResult<Money> {
    Money::parse(amount).map_err(|e| BudgetBookError::InvalidArgument(e.to_string()))
}

/// Parse an optional date argument (YYYY-MM-DD), defaulting to today
pub fn parse_date(date: Option<&str>) -> BudgetBookResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            BudgetBookError::InvalidArgument(format!("Invalid date (expected YYYY-MM-DD): {}", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
