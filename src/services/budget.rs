//! Budget service
//!
//! Upsert-style budget management: one amount per (month, category) pair,
//! create-or-replace on set.

use crate::error::{BudgetBookError, BudgetBookResult};
use crate::models::{Budget, CategoryId, Money, MonthKey};
use crate::storage::Storage;

/// Service for monthly budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a category in a month (create-or-replace)
    pub fn set(
        &self,
        month: MonthKey,
        category_id: CategoryId,
        amount: Money,
    ) -> BudgetBookResult<Budget> {
        if amount.is_negative() {
            return Err(BudgetBookError::InvalidArgument(format!(
                "Budget amount cannot be negative: {}",
                amount
            )));
        }

        // The category must exist
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(BudgetBookError::category_not_found(category_id.to_string()));
        }

        let budget = match self.storage.budgets.get(month, category_id)? {
            Some(mut existing) => {
                existing.set_amount(amount);
                existing
            }
            None => Budget::new(month, category_id, amount),
        };

        self.storage.budgets.set(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Get the budget for a (month, category) pair
    pub fn get(
        &self,
        month: MonthKey,
        category_id: CategoryId,
    ) -> BudgetBookResult<Option<Budget>> {
        self.storage.budgets.get(month, category_id)
    }

    /// List all budgets for a month
    pub fn list_for_month(&self, month: MonthKey) -> BudgetBookResult<Vec<Budget>> {
        self.storage.budgets.get_for_month(month)
    }

    /// Remove the budget for a (month, category) pair
    pub fn remove(&self, month: MonthKey, category_id: CategoryId) -> BudgetBookResult<()> {
        if !self.storage.budgets.remove(month, category_id)? {
            return Err(BudgetBookError::budget_not_found(format!(
                "{} / {}",
                month, category_id
            )));
        }

        self.storage.budgets.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetBookPaths;
    use crate::models::Category;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed_category(storage: &Storage, name: &str) -> Category {
        let category = Category::with_default_color(name);
        storage.categories.upsert(category.clone()).unwrap();
        category
    }

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn test_set_creates_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let category = seed_category(&storage, "Food");
        let service = BudgetService::new(&storage);

        let budget = service
            .set(march(), category.id, Money::from_cents(20000))
            .unwrap();
        assert_eq!(budget.amount.cents(), 20000);
        assert_eq!(budget.month, march());
    }

    #[test]
    fn test_set_replaces_existing() {
        let (_temp_dir, storage) = create_test_storage();
        let category = seed_category(&storage, "Food");
        let service = BudgetService::new(&storage);

        service
            .set(march(), category.id, Money::from_cents(20000))
            .unwrap();
        service
            .set(march(), category.id, Money::from_cents(25000))
            .unwrap();

        let budgets = service.list_for_month(march()).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount.cents(), 25000);
    }

    #[test]
    fn test_set_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let category = seed_category(&storage, "Food");
        let service = BudgetService::new(&storage);

        let err = service
            .set(march(), category.id, Money::from_cents(-100))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_set_allows_zero_ceiling() {
        let (_temp_dir, storage) = create_test_storage();
        let category = seed_category(&storage, "Frozen");
        let service = BudgetService::new(&storage);

        let budget = service.set(march(), category.id, Money::zero()).unwrap();
        assert!(budget.amount.is_zero());
    }

    #[test]
    fn test_set_rejects_unknown_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service
            .set(march(), CategoryId::new(), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let category = seed_category(&storage, "Food");
        let service = BudgetService::new(&storage);

        service
            .set(march(), category.id, Money::from_cents(20000))
            .unwrap();
        service.remove(march(), category.id).unwrap();

        assert!(service.get(march(), category.id).unwrap().is_none());

        let err = service.remove(march(), category.id).unwrap_err();
        assert!(err.is_not_found());
    }
}
