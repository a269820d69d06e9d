//! Reports module for BudgetBook
//!
//! The aggregation engine (pure spending/budget folds) and the monthly
//! report assembler that packages its output for presentation.

pub mod aggregate;
pub mod monthly;

pub use aggregate::{
    build_category_report, build_monthly_summary, category_budget, category_spending,
    BudgetStatus, CategoryReport, MonthlySummary,
};
pub use monthly::{assemble_monthly_report, MonthlyReport, ReportWarning};
