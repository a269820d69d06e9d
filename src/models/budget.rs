//! Budget model
//!
//! A budget is a planned spending ceiling for one category in one month.
//! At most one budget exists per (month, category) pair; the storage layer's
//! create-or-replace upsert keeps that invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;
use super::month::MonthKey;

/// A monthly budget amount for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// The month this budget applies to
    pub month: MonthKey,

    /// The category this budget is for
    pub category_id: CategoryId,

    /// Planned spending ceiling for the month
    pub amount: Money,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(month: MonthKey, category_id: CategoryId, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            month,
            category_id,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the budgeted amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.month, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
