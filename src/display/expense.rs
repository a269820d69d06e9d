//! Expense list formatting for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format expenses as a table, resolving category names where possible
pub fn format_expense_list(expenses: &[Expense], categories: &[Category]) -> String {
    if expenses.is_empty() {
        return "No expenses found for this month.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| {
            let category = categories
                .iter()
                .find(|c| c.id == e.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| e.category_id.to_string());

            ExpenseRow {
                date: e.date.to_string(),
                category,
                description: e
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description".to_string()),
                amount: e.amount.to_string(),
                id: e.id.to_string(),
            }
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
