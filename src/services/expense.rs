//! Expense service
//!
//! Validated expense recording and month-scoped listing.

use chrono::NaiveDate;

use crate::error::{BudgetBookError, BudgetBookResult};
use crate::models::{CategoryId, Expense, ExpenseId, Money, MonthKey};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(
        &self,
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
        description: Option<&str>,
    ) -> BudgetBookResult<Expense> {
        if amount.is_negative() {
            return Err(BudgetBookError::InvalidArgument(format!(
                "Expense amount cannot be negative: {}",
                amount
            )));
        }

        // The category must exist
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(BudgetBookError::category_not_found(category_id.to_string()));
        }

        // Blank descriptions are stored as absent
        let description = description.map(str::trim).filter(|d| !d.is_empty());

        let expense = match description {
            Some(desc) => Expense::with_description(category_id, amount, date, desc),
            None => Expense::new(category_id, amount, date),
        };

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> BudgetBookResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List a month's expenses, most recent first (stable within a day)
    pub fn list_for_month(&self, month: MonthKey) -> BudgetBookResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.get_by_month(month)?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Delete an expense by ID
    pub fn delete(&self, id: ExpenseId) -> BudgetBookResult<()> {
        if !self.storage.expenses.delete(id)? {
            return Err(BudgetBookError::expense_not_found(id.to_string()));
        }

        self.storage.expenses.save()?;
        Ok(())
    }
}
