//! CLI commands for expense management

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::BudgetBookResult;
use crate::models::ExpenseId;
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Category name or ID
        category: String,

        /// Amount spent (e.g. "12.50")
        // Let "-5" through the parser; validation rejects it with a real error
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses for a month, most recent first
    #[command(alias = "ls")]
    List {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Show at most N rows (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show every row for the month
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense subcommand
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetBookResult<()> {
    let expense_service = ExpenseService::new(storage);
    let category_service = CategoryService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let amount = super::parse_amount(&amount)?;
            let date = super::parse_date(date.as_deref())?;
            let target = category_service.require(&category)?;

            let expense =
                expense_service.add(target.id, amount, date, description.as_deref())?;
            println!(
                "Recorded {} against '{}' on {} ({})",
                expense.amount, target.name, expense.date, expense.id
            );
        }
        ExpenseCommands::List { month, limit, all } => {
            let month = super::parse_month(month.as_deref())?;
            let mut expenses = expense_service.list_for_month(month)?;

            let total = expenses.len();
            if !all {
                expenses.truncate(limit.unwrap_or(settings.recent_expense_limit));
            }

            println!("Expenses for {}:", month);
            let categories = category_service.list()?;
            print!("{}", format_expense_list(&expenses, &categories));

            if expenses.len() < total {
                println!(
                    "Showing {} of {} expenses. Use --all to see every row.",
                    expenses.len(),
                    total
                );
            }
        }
        ExpenseCommands::Delete { id } => {
            let id: ExpenseId = id.parse().map_err(|_| {
                crate::error::BudgetBookError::InvalidArgument(format!("Invalid expense ID: {}", id))
            })?;

            expense_service.delete(id)?;
            println!("Deleted expense {}", id);
        }
    }

    Ok(())
}
