//! Expense model
//!
//! A single dated, categorized spending transaction. An expense belongs to
//! exactly one category and one calendar month, derived from its date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;
use super::month::MonthKey;

/// A spending transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The category this expense is charged against
    pub category_id: CategoryId,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            category_id,
            amount,
            date,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new expense with a description
    pub fn with_description(
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(category_id, amount, date);
        expense.description = Some(description.into());
        expense
    }

    /// The calendar month this expense belongs to
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{} {} ({})", self.date, self.amount, desc),
            None => write!(f, "{} {}", self.date, self.amount),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let category_id = CategoryId::new();
        let expense = Expense::new(category_id, Money::from_cents(5000), test_date());

        assert_eq!(expense.category_id, category_id);
        assert_eq!(expense.amount.cents(), 5000);
        assert_eq!(expense.date, test_date());
        assert!(expense.description.is_none());
    }

    #[test]
    fn test_with_description() {
        let expense = Expense::with_description(
            CategoryId::new(),
            Money::from_cents(1250),
            test_date(),
            "Lunch",
        );
        assert_eq!(expense.description.as_deref(), Some("Lunch"));
    }

    #[test]
    fn test_month_key() {
        let expense = Expense::new(CategoryId::new(), Money::from_cents(5000), test_date());
        assert_eq!(expense.month_key(), MonthKey::new(2024, 3).unwrap());
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(CategoryId::new(), Money::from_cents(5000), test_date());
        assert!(expense.validate().is_ok());

        // Zero-amount expenses are allowed
        expense.amount = Money::zero();
        assert!(expense.validate().is_ok());

        expense.amount = Money::from_cents(-5000);
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount)
        );
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::with_description(
            CategoryId::new(),
            Money::from_cents(5000),
            test_date(),
            "Groceries run",
        );
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.description, deserialized.description);
    }

    #[test]
    fn test_description_omitted_from_json_when_none() {
        let expense = Expense::new(CategoryId::new(), Money::from_cents(100), test_date());
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("description"));
    }
}
