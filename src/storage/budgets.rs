//! Budget repository for JSON storage
//!
//! Budgets are keyed by (month, category); `set` has create-or-replace
//! semantics, so the store can never hold two rows for the same pair.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetBookError;
use crate::models::{Budget, CategoryId, MonthKey};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), BudgetBookError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self.budgets.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *budgets = file_data.budgets;
        Ok(())
    }

    /// Save budgets to disk, ordered by month for stable files
    pub fn save(&self) -> Result<(), BudgetBookError> {
        let budgets = self.budgets.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut list = budgets.clone();
        list.sort_by_key(|b| b.month);

        let file_data = BudgetData { budgets: list };
        write_json_atomic(&self.path, &file_data)
    }

    /// Create or replace the budget for a (month, category) pair
    pub fn set(&self, budget: Budget) -> Result<(), BudgetBookError> {
        let mut budgets = self.budgets.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(existing) = budgets
            .iter_mut()
            .find(|b| b.month == budget.month && b.category_id == budget.category_id)
        {
            *existing = budget;
        } else {
            budgets.push(budget);
        }

        Ok(())
    }

    /// Get the budget for a (month, category) pair
    pub fn get(
        &self,
        month: MonthKey,
        category_id: CategoryId,
    ) -> Result<Option<Budget>, BudgetBookError> {
        let budgets = self.budgets.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(budgets
            .iter()
            .find(|b| b.month == month && b.category_id == category_id)
            .cloned())
    }

    /// Get all budgets scoped to a month, in insertion order
    pub fn get_for_month(&self, month: MonthKey) -> Result<Vec<Budget>, BudgetBookError> {
        let budgets = self.budgets.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(budgets.iter().filter(|b| b.month == month).cloned().collect())
    }

    /// Remove the budget for a (month, category) pair; returns whether
    /// anything was removed
    pub fn remove(
        &self,
        month: MonthKey,
        category_id: CategoryId,
    ) -> Result<bool, BudgetBookError> {
        let mut budgets = self.budgets.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = budgets.len();
        budgets.retain(|b| !(b.month == month && b.category_id == category_id));
        Ok(budgets.len() < before)
    }

    /// Remove all budgets for a category (any month); returns removed count
    pub fn remove_for_category(&self, category_id: CategoryId) -> Result<usize, BudgetBookError> {
        let mut budgets = self.budgets.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = budgets.len();
        budgets.retain(|b| b.category_id != category_id);
        Ok(before - budgets.len())
    }
}
