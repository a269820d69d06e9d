//! Report formatting utilities for terminal output

use crate::models::Money;
use crate::reports::CategoryReport;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation, capped at full width
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one category's report as a dashboard card
///
/// Shows the spent/budget line, a progress bar, and either the remaining
/// amount or how far over budget the category is.
pub fn format_category_card(report: &CategoryReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", report.category.name));
    output.push_str(&format!(
        "  Spent: {}   Budget: {}\n",
        report.spent, report.budget
    ));
    output.push_str(&format!(
        "  {} {}\n",
        format_bar(report.percent_spent, 100.0, 30),
        format_percentage(report.percent_spent)
    ));

    if report.is_over_budget {
        output.push_str(&format!(
            "  Over by {}  [OVER BUDGET]\n",
            report.remaining.abs()
        ));
    } else {
        output.push_str(&format!("  Left: {}\n", report.remaining));
    }

    output
}
