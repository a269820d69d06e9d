//! Spending aggregation
//!
//! Pure fold/join functions over category, budget, and expense collections.
//! No I/O and no internal state: callers pass in complete snapshots for a
//! month and every view derives its numbers from the same functions, so a
//! table and a chart can never disagree on a total.

use serde::Serialize;

use crate::models::{Budget, Category, CategoryId, Expense, Money};

/// Percentage of budget at which a category enters the warning tier
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Display status tier for a category's spending against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetStatus {
    /// Spending below the warning threshold
    Normal,
    /// Spending at 80-100% of budget
    Warning,
    /// Spending strictly exceeds budget
    OverBudget,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "Within Budget"),
            Self::Warning => write!(f, "Warning"),
            Self::OverBudget => write!(f, "Over Budget"),
        }
    }
}

/// Spending-vs-budget breakdown for a single category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    /// The category this row describes
    pub category: Category,
    /// Budgeted ceiling for the month (zero if no budget row exists)
    pub budget: Money,
    /// Total spent in the month
    pub spent: Money,
    /// budget - spent; negative when overspent
    pub remaining: Money,
    /// remaining < 0 (strictly; spending the exact budget is not over)
    pub is_over_budget: bool,
    /// spent as a percentage of budget (0.0 when budget is zero)
    pub percent_spent: f64,
    /// Display tier derived from the numbers above
    pub status: BudgetStatus,
}

/// Whole-month totals across every category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Sum of all category budgets for the month
    pub total_budget: Money,
    /// Sum of ALL expenses in the month, budgeted category or not
    pub total_spent: Money,
    /// total_budget - total_spent
    pub total_remaining: Money,
    /// total_remaining < 0
    pub is_overall_over_budget: bool,
}

impl MonthlySummary {
    /// An all-zero summary, used for the "no categories yet" empty state
    pub fn empty() -> Self {
        Self {
            total_budget: Money::zero(),
            total_spent: Money::zero(),
            total_remaining: Money::zero(),
            is_overall_over_budget: false,
        }
    }
}

/// Sum spending for one category across an expense collection
///
/// Returns zero for no matches and never errors on empty input. Negative
/// amounts are invalid input and are excluded here rather than netted
/// against the budget; the assembler flags them separately.
pub fn category_spending(expenses: &[Expense], category_id: CategoryId) -> Money {
    expenses
        .iter()
        .filter(|e| e.category_id == category_id && !e.amount.is_negative())
        .map(|e| e.amount)
        .sum()
}

/// Look up the budgeted amount for one category
///
/// Returns the first matching entry's amount, or zero if the category has
/// no budget row. A duplicate row for the same category is a constraint
/// violation upstream; first-match keeps the result deterministic and the
/// assembler reports the anomaly as a warning.
pub fn category_budget(budgets: &[Budget], category_id: CategoryId) -> Money {
    budgets
        .iter()
        .find(|b| b.category_id == category_id)
        .map(|b| b.amount)
        .unwrap_or_else(Money::zero)
}

/// Categories that appear in more than one budget row, in first-seen order
pub fn duplicate_budget_categories(budgets: &[Budget]) -> Vec<CategoryId> {
    let mut seen: Vec<CategoryId> = Vec::new();
    let mut duplicates: Vec<CategoryId> = Vec::new();

    for budget in budgets {
        if seen.contains(&budget.category_id) {
            if !duplicates.contains(&budget.category_id) {
                duplicates.push(budget.category_id);
            }
        } else {
            seen.push(budget.category_id);
        }
    }

    duplicates
}

/// Build the spending-vs-budget report row for one category
pub fn build_category_report(
    category: &Category,
    expenses: &[Expense],
    budgets: &[Budget],
) -> CategoryReport {
    let spent = category_spending(expenses, category.id);
    let budget = category_budget(budgets, category.id);
    let remaining = budget - spent;
    let is_over_budget = remaining.is_negative();
    let percent_spent = spent.percent_of(budget);

    let status = if is_over_budget {
        BudgetStatus::OverBudget
    } else if percent_spent >= WARNING_THRESHOLD {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Normal
    };

    CategoryReport {
        category: category.clone(),
        budget,
        spent,
        remaining,
        is_over_budget,
        percent_spent,
        status,
    }
}

/// Fold category reports and the month's expenses into whole-month totals
///
/// `total_spent` is folded from the expense collection itself, not from the
/// report rows: spending charged to a category with no budget row, or to a
/// category missing from the supplied collection, still counts toward the
/// month's total. Per-category `remaining` is only meaningful where a
/// budget exists.
pub fn build_monthly_summary(reports: &[CategoryReport], expenses: &[Expense]) -> MonthlySummary {
    let total_budget: Money = reports.iter().map(|r| r.budget).sum();
    let total_spent: Money = expenses
        .iter()
        .filter(|e| !e.amount.is_negative())
        .map(|e| e.amount)
        .sum();
    let total_remaining = total_budget - total_spent;

    MonthlySummary {
        total_budget,
        total_spent,
        total_remaining,
        is_overall_over_budget: total_remaining.is_negative(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    fn expense(category_id: CategoryId, cents: i64, d: u32) -> Expense {
        Expense::new(category_id, Money::from_cents(cents), date(d))
    }

    #[test]
    fn test_category_spending_sums_matches() {
        let food = Category::with_default_color("Food");
        let transport = Category::with_default_color("Transport");

        let expenses = vec![
            expense(food.id, 5000, 1),
            expense(transport.id, 12000, 2),
            expense(food.id, 3000, 15),
        ];

        assert_eq!(category_spending(&expenses, food.id).cents(), 8000);
        assert_eq!(category_spending(&expenses, transport.id).cents(), 12000);
    }

    #[test]
    fn test_category_spending_empty_input() {
        let id = CategoryId::new();
        assert_eq!(category_spending(&[], id), Money::zero());
    }

    #[test]
    fn test_category_spending_no_matches() {
        let expenses = vec![expense(CategoryId::new(), 5000, 1)];
        assert_eq!(category_spending(&expenses, CategoryId::new()), Money::zero());
    }

    #[test]
    fn test_category_spending_is_additive_over_partitions() {
        let id = CategoryId::new();
        let part1 = vec![expense(id, 1000, 1), expense(id, 2000, 5)];
        let part2 = vec![expense(id, 3000, 10), expense(id, 4000, 20)];

        let mut combined = part1.clone();
        combined.extend(part2.clone());

        assert_eq!(
            category_spending(&combined, id),
            category_spending(&part1, id) + category_spending(&part2, id)
        );
    }

    #[test]
    fn test_category_spending_excludes_negative_amounts() {
        let id = CategoryId::new();
        let expenses = vec![expense(id, 5000, 1), expense(id, -2000, 2)];

        // The refund-looking entry must not net the total down
        assert_eq!(category_spending(&expenses, id).cents(), 5000);
    }

    #[test]
    fn test_category_budget_first_match_wins() {
        let id = CategoryId::new();
        let budgets = vec![
            Budget::new(march(), id, Money::from_cents(20000)),
            Budget::new(march(), id, Money::from_cents(999)),
        ];

        assert_eq!(category_budget(&budgets, id).cents(), 20000);
    }

    #[test]
    fn test_category_budget_missing_is_zero() {
        assert_eq!(category_budget(&[], CategoryId::new()), Money::zero());
    }

    #[test]
    fn test_duplicate_budget_categories() {
        let a = CategoryId::new();
        let b = CategoryId::new();
        let budgets = vec![
            Budget::new(march(), a, Money::from_cents(100)),
            Budget::new(march(), b, Money::from_cents(200)),
            Budget::new(march(), a, Money::from_cents(300)),
            Budget::new(march(), a, Money::from_cents(400)),
        ];

        assert_eq!(duplicate_budget_categories(&budgets), vec![a]);
        assert!(duplicate_budget_categories(&budgets[..2]).is_empty());
    }

    #[test]
    fn test_report_within_budget() {
        let food = Category::with_default_color("Food");
        let budgets = vec![Budget::new(march(), food.id, Money::from_cents(20000))];
        let expenses = vec![expense(food.id, 5000, 1), expense(food.id, 3000, 15)];

        let report = build_category_report(&food, &expenses, &budgets);
        assert_eq!(report.budget.cents(), 20000);
        assert_eq!(report.spent.cents(), 8000);
        assert_eq!(report.remaining.cents(), 12000);
        assert!(!report.is_over_budget);
        assert_eq!(report.status, BudgetStatus::Normal);
        assert!((report.percent_spent - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_over_budget() {
        let transport = Category::with_default_color("Transport");
        let budgets = vec![Budget::new(march(), transport.id, Money::from_cents(10000))];
        let expenses = vec![expense(transport.id, 12000, 3)];

        let report = build_category_report(&transport, &expenses, &budgets);
        assert_eq!(report.remaining.cents(), -2000);
        assert!(report.is_over_budget);
        assert_eq!(report.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_report_no_budget_row() {
        let category = Category::with_default_color("Hobbies");
        let expenses = vec![expense(category.id, 4000, 7)];

        let report = build_category_report(&category, &expenses, &[]);
        assert_eq!(report.budget, Money::zero());
        assert_eq!(report.remaining.cents(), -4000);
        assert!(report.is_over_budget);
        // No budget and no way to divide: displays as 0%
        assert_eq!(report.percent_spent, 0.0);
    }

    #[test]
    fn test_report_no_budget_no_spending_is_not_over() {
        let category = Category::with_default_color("Dormant");

        let report = build_category_report(&category, &[], &[]);
        assert_eq!(report.remaining, Money::zero());
        assert!(!report.is_over_budget);
        assert_eq!(report.status, BudgetStatus::Normal);
    }

    #[test]
    fn test_report_spent_equals_budget_boundary() {
        let category = Category::with_default_color("Exact");
        let budgets = vec![Budget::new(march(), category.id, Money::from_cents(10000))];
        let expenses = vec![expense(category.id, 10000, 10)];

        let report = build_category_report(&category, &expenses, &budgets);
        assert_eq!(report.remaining, Money::zero());
        // Strict less-than: spending the whole budget is not over-budget
        assert!(!report.is_over_budget);
        assert_eq!(report.status, BudgetStatus::Warning);
    }

    #[test]
    fn test_warning_tier_thresholds() {
        let category = Category::with_default_color("Tiers");
        let budgets = vec![Budget::new(march(), category.id, Money::from_cents(10000))];

        let below = vec![expense(category.id, 7999, 1)];
        let report = build_category_report(&category, &below, &budgets);
        assert_eq!(report.status, BudgetStatus::Normal);

        let at = vec![expense(category.id, 8000, 1)];
        let report = build_category_report(&category, &at, &budgets);
        assert_eq!(report.status, BudgetStatus::Warning);

        let over = vec![expense(category.id, 10001, 1)];
        let report = build_category_report(&category, &over, &budgets);
        assert_eq!(report.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_zero_expense_category_still_reports() {
        let category = Category::with_default_color("Untouched");
        let budgets = vec![Budget::new(march(), category.id, Money::from_cents(5000))];

        let report = build_category_report(&category, &[], &budgets);
        assert_eq!(report.spent, Money::zero());
        assert_eq!(report.remaining.cents(), 5000);
    }

    #[test]
    fn test_summary_counts_unbudgeted_spending() {
        let food = Category::with_default_color("Food");
        let misc = Category::with_default_color("Misc");

        let budgets = vec![Budget::new(march(), food.id, Money::from_cents(20000))];
        let expenses = vec![
            expense(food.id, 8000, 1),
            // Misc has no budget row; its spending still counts
            expense(misc.id, 5000, 2),
        ];

        let reports = vec![
            build_category_report(&food, &expenses, &budgets),
            build_category_report(&misc, &expenses, &budgets),
        ];

        let summary = build_monthly_summary(&reports, &expenses);
        assert_eq!(summary.total_budget.cents(), 20000);
        assert_eq!(summary.total_spent.cents(), 13000);
        assert_eq!(summary.total_remaining.cents(), 7000);
        assert!(!summary.is_overall_over_budget);
    }

    #[test]
    fn test_summary_counts_spending_outside_known_categories() {
        let food = Category::with_default_color("Food");
        let budgets = vec![Budget::new(march(), food.id, Money::from_cents(10000))];

        // An expense referencing a category absent from the report rows
        let expenses = vec![
            expense(food.id, 4000, 1),
            expense(CategoryId::new(), 9000, 2),
        ];

        let reports = vec![build_category_report(&food, &expenses, &budgets)];
        let summary = build_monthly_summary(&reports, &expenses);

        assert_eq!(summary.total_spent.cents(), 13000);
        assert_eq!(summary.total_remaining.cents(), -3000);
        assert!(summary.is_overall_over_budget);
    }

    #[test]
    fn test_empty_summary() {
        let summary = build_monthly_summary(&[], &[]);
        assert_eq!(summary.total_budget, Money::zero());
        assert_eq!(summary.total_spent, Money::zero());
        assert_eq!(summary.total_remaining, Money::zero());
        assert!(!summary.is_overall_over_budget);
    }
}
