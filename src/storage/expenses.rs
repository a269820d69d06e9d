//! Expense repository for JSON storage
//!
//! Expenses are kept in creation order; month queries filter on the derived
//! month key and keep that order so same-day entries stay stable.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetBookError;
use crate::models::{CategoryId, Expense, ExpenseId, MonthKey};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), BudgetBookError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut expenses = self.expenses.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *expenses = file_data.expenses;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), BudgetBookError> {
        let expenses = self.expenses.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = ExpenseData {
            expenses: expenses.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Insert or replace an expense (matched by ID)
    pub fn upsert(&self, expense: Expense) -> Result<(), BudgetBookError> {
        let mut expenses = self.expenses.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(existing) = expenses.iter_mut().find(|e| e.id == expense.id) {
            *existing = expense;
        } else {
            expenses.push(expense);
        }

        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetBookError> {
        let expenses = self.expenses.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(expenses.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses dated within a month, in creation order
    pub fn get_by_month(&self, month: MonthKey) -> Result<Vec<Expense>, BudgetBookError> {
        let expenses = self.expenses.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect())
    }

    /// Count expenses charged against a category (any month)
    pub fn count_for_category(&self, category_id: CategoryId) -> Result<usize, BudgetBookError> {
        let expenses = self.expenses.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(expenses.iter().filter(|e| e.category_id == category_id).count())
    }

    /// Delete an expense by ID; returns whether anything was removed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, BudgetBookError> {
        let mut expenses = self.expenses.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        Ok(expenses.len() < before)
    }
}
