//! CLI commands for budget management

use clap::Subcommand;

use crate::error::BudgetBookResult;
use crate::services::{BudgetService, CategoryService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for a category in a month (create-or-replace)
    Set {
        /// Category name or ID
        category: String,

        /// Budget amount (e.g. "200" or "200.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets for a month
    #[command(alias = "ls")]
    List {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove the budget for a category in a month
    #[command(alias = "rm")]
    Remove {
        /// Category name or ID
        category: String,

        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget subcommand
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> BudgetBookResult<()> {
    let budget_service = BudgetService::new(storage);
    let category_service = CategoryService::new(storage);

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let month = super::parse_month(month.as_deref())?;
            let amount = super::parse_amount(&amount)?;
            let target = category_service.require(&category)?;

            let budget = budget_service.set(month, target.id, amount)?;
            println!(
                "Budget for '{}' in {} set to {}",
                target.name, budget.month, budget.amount
            );
        }
        BudgetCommands::List { month } => {
            let month = super::parse_month(month.as_deref())?;
            let budgets = budget_service.list_for_month(month)?;

            if budgets.is_empty() {
                println!("No budgets set for {}.", month);
            } else {
                println!("Budgets for {}:", month);
                for budget in budgets {
                    let name = category_service
                        .get(budget.category_id)?
                        .map(|c| c.name)
                        .unwrap_or_else(|| budget.category_id.to_string());
                    println!("  {:<24} {}", name, budget.amount);
                }
            }
        }
        BudgetCommands::Remove { category, month } => {
            let month = super::parse_month(month.as_deref())?;
            let target = category_service.require(&category)?;

            budget_service.remove(month, target.id)?;
            println!("Removed budget for '{}' in {}", target.name, month);
        }
    }

    Ok(())
}
