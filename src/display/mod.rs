//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, progress bars, and status indicators.

pub mod category;
pub mod expense;
pub mod report;

pub use category::format_category_list;
pub use expense::format_expense_list;
pub use report::{format_bar, format_category_card, format_money_colored, format_percentage};
