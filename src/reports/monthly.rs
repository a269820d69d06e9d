//! Monthly report assembly
//!
//! Packages aggregation results into the single report document the
//! presentation layer renders: whole-month summary, one row per category,
//! and the month's expenses for the recent-expenses view.

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetBookError, BudgetBookResult};
use crate::models::{Budget, Category, CategoryId, Expense, ExpenseId, MonthKey};
use crate::storage::Storage;

use super::aggregate::{
    build_category_report, build_monthly_summary, duplicate_budget_categories, CategoryReport,
    MonthlySummary,
};

/// A non-fatal data anomaly observed while assembling a report
///
/// The report is still produced using a deterministic fallback; warnings
/// make the anomaly visible to the caller instead of failing the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportWarning {
    /// More than one budget row for the same category this month;
    /// the first row was used
    #[serde(rename_all = "camelCase")]
    DuplicateBudget { category_id: CategoryId },

    /// An expense references a category missing from the category
    /// collection; its amount still counts toward the month's total
    #[serde(rename_all = "camelCase")]
    UnknownCategory {
        expense_id: ExpenseId,
        category_id: CategoryId,
    },

    /// An expense carries a negative amount; it was excluded from all
    /// spending totals
    #[serde(rename_all = "camelCase")]
    NegativeAmount { expense_id: ExpenseId },
}

impl std::fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateBudget { category_id } => {
                write!(f, "duplicate budget rows for category {}", category_id)
            }
            Self::UnknownCategory {
                expense_id,
                category_id,
            } => write!(
                f,
                "expense {} references unknown category {}",
                expense_id, category_id
            ),
            Self::NegativeAmount { expense_id } => {
                write!(f, "expense {} has a negative amount", expense_id)
            }
        }
    }
}

/// The assembled report for one month
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// The month this report covers
    pub month: MonthKey,
    /// Whole-month totals
    pub summary: MonthlySummary,
    /// One row per category, in the order categories were supplied
    pub report_data: Vec<CategoryReport>,
    /// The month's expenses, most recent first (stable within a day)
    pub expenses: Vec<Expense>,
    /// Data anomalies observed during assembly
    pub warnings: Vec<ReportWarning>,
}

/// Assemble the report document for a month
///
/// Budgets and expenses are defensively re-filtered by month key: callers
/// are expected to pass month-scoped collections, but an over-returning
/// store must not leak foreign months into the totals. Every supplied
/// category gets a row, budgeted or not; an empty category collection
/// yields an empty report with a zero summary rather than an error.
///
/// Deterministic: identical inputs produce identical output, including
/// ordering. Row order follows the category collection; expenses are
/// sorted most-recent-first with ties kept in input order.
pub fn assemble_monthly_report(
    month: MonthKey,
    categories: &[Category],
    budgets: &[Budget],
    expenses: &[Expense],
) -> MonthlyReport {
    let month_budgets: Vec<Budget> = budgets
        .iter()
        .filter(|b| b.month == month)
        .cloned()
        .collect();

    let mut month_expenses: Vec<Expense> = expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect();

    let mut warnings: Vec<ReportWarning> = duplicate_budget_categories(&month_budgets)
        .into_iter()
        .map(|category_id| ReportWarning::DuplicateBudget { category_id })
        .collect();

    for expense in &month_expenses {
        if !categories.iter().any(|c| c.id == expense.category_id) {
            warnings.push(ReportWarning::UnknownCategory {
                expense_id: expense.id,
                category_id: expense.category_id,
            });
        }
        if expense.amount.is_negative() {
            warnings.push(ReportWarning::NegativeAmount {
                expense_id: expense.id,
            });
        }
    }

    let report_data: Vec<CategoryReport> = categories
        .iter()
        .map(|category| build_category_report(category, &month_expenses, &month_budgets))
        .collect();

    // No categories is the "no categories yet" empty state: empty rows and
    // a zero summary, not an error
    let summary = if categories.is_empty() {
        MonthlySummary::empty()
    } else {
        build_monthly_summary(&report_data, &month_expenses)
    };

    // Most recent first; sort_by is stable, so same-day expenses keep
    // their creation order
    month_expenses.sort_by(|a, b| b.date.cmp(&a.date));

    MonthlyReport {
        month,
        summary,
        report_data,
        expenses: month_expenses,
        warnings,
    }
}

impl MonthlyReport {
    /// Generate the report for a month from storage
    pub fn generate(storage: &Storage, month: MonthKey) -> BudgetBookResult<Self> {
        let categories = storage.categories.get_all()?;
        let budgets = storage.budgets.get_for_month(month)?;
        let expenses = storage.expenses.get_by_month(month)?;

        Ok(assemble_monthly_report(month, &categories, &budgets, &expenses))
    }

    /// The most recent expenses, capped at `limit`
    pub fn recent_expenses(&self, limit: usize) -> &[Expense] {
        &self.expenses[..self.expenses.len().min(limit)]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        use crate::display::report::{format_bar, format_percentage};

        let mut output = String::new();

        // Header
        output.push_str(&format!("Monthly Report - {}\n", self.month));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Total Budget:    {}\n", self.summary.total_budget));
        output.push_str(&format!("Total Spent:     {}\n", self.summary.total_spent));
        output.push_str(&format!(
            "Total Remaining: {}{}\n\n",
            self.summary.total_remaining,
            if self.summary.is_overall_over_budget {
                " (OVER BUDGET)"
            } else {
                ""
            }
        ));

        if self.report_data.is_empty() {
            output.push_str("No categories yet.\n");
            return output;
        }

        // Column headers
        output.push_str(&format!(
            "{:<22} {:>12} {:>12} {:>12} {:>7}  {:<14}\n",
            "Category", "Budget", "Spent", "Remaining", "%", "Status"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.report_data {
            output.push_str(&format!(
                "{:<22} {:>12} {:>12} {:>12} {:>7}  {:<14}\n",
                row.category.name,
                row.budget.to_string(),
                row.spent.to_string(),
                row.remaining.to_string(),
                format_percentage(row.percent_spent),
                row.status.to_string()
            ));
            output.push_str(&format!(
                "{:<22} {}\n",
                "",
                format_bar(row.percent_spent, 100.0, 40)
            ));
        }

        // Recent expenses
        if !self.expenses.is_empty() {
            output.push_str("\nRecent Expenses\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');

            for expense in self.recent_expenses(10) {
                let category_name = self
                    .report_data
                    .iter()
                    .find(|r| r.category.id == expense.category_id)
                    .map(|r| r.category.name.clone())
                    .unwrap_or_else(|| expense.category_id.to_string());

                output.push_str(&format!(
                    "{}  {:<22} {:<28} {:>12}\n",
                    expense.date,
                    category_name,
                    expense.description.as_deref().unwrap_or("No description"),
                    expense.amount.to_string()
                ));
            }
        }

        // Warnings
        if !self.warnings.is_empty() {
            output.push('\n');
            for warning in &self.warnings {
                output.push_str(&format!("warning: {}\n", warning));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetBookResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record([
            "Month",
            "Category",
            "Budget",
            "Spent",
            "Remaining",
            "Percent",
            "Status",
        ])
        .map_err(|e| BudgetBookError::Export(e.to_string()))?;

        for row in &self.report_data {
            wtr.write_record([
                self.month.to_string(),
                row.category.name.clone(),
                format!("{:.2}", row.budget.cents() as f64 / 100.0),
                format!("{:.2}", row.spent.cents() as f64 / 100.0),
                format!("{:.2}", row.remaining.cents() as f64 / 100.0),
                format!("{:.2}", row.percent_spent),
                row.status.to_string(),
            ])
            .map_err(|e| BudgetBookError::Export(e.to_string()))?;
        }

        wtr.write_record([
            self.month.to_string(),
            "TOTAL".to_string(),
            format!("{:.2}", self.summary.total_budget.cents() as f64 / 100.0),
            format!("{:.2}", self.summary.total_spent.cents() as f64 / 100.0),
            format!("{:.2}", self.summary.total_remaining.cents() as f64 / 100.0),
            String::new(),
            String::new(),
        ])
        .map_err(|e| BudgetBookError::Export(e.to_string()))?;

        wtr.flush()
            .map_err(|e| BudgetBookError::Export(e.to_string()))?;

        Ok(())
    }

    /// Export the full report document as JSON
    pub fn export_json<W: Write>(&self, writer: W) -> BudgetBookResult<()> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| BudgetBookError::Export(e.to_string()))
    }
}
