//! Category service
//!
//! Provides business logic for category management: validated CRUD plus the
//! delete-time dependency check against recorded expenses.

use crate::error::{BudgetBookError, BudgetBookResult};
use crate::models::{category, Category, CategoryId, DEFAULT_COLOR};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, name: &str, color: Option<&str>) -> BudgetBookResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetBookError::InvalidArgument(
                "Category name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(BudgetBookError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name, color.unwrap_or(DEFAULT_COLOR));
        category
            .validate()
            .map_err(|e| BudgetBookError::InvalidArgument(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> BudgetBookResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> BudgetBookResult<Option<Category>> {
        // Try by name first
        if let Some(found) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(found));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// Find a category by name or ID string, erroring when absent
    pub fn require(&self, identifier: &str) -> BudgetBookResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| BudgetBookError::category_not_found(identifier))
    }

    /// List all categories in creation order
    pub fn list(&self) -> BudgetBookResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Update a category's name and/or color
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> BudgetBookResult<Category> {
        let mut target = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetBookError::category_not_found(id.to_string()))?;

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(BudgetBookError::InvalidArgument(
                    "Category name cannot be empty".into(),
                ));
            }

            // Check for duplicate
            if let Some(existing) = self.storage.categories.get_by_name(new_name)? {
                if existing.id != id {
                    return Err(BudgetBookError::Duplicate {
                        entity_type: "Category",
                        identifier: new_name.to_string(),
                    });
                }
            }

            target.rename(new_name);
        }

        if let Some(new_color) = color {
            if !category::is_valid_color(new_color) {
                return Err(BudgetBookError::InvalidArgument(format!(
                    "Invalid color '{}' (expected #RRGGBB)",
                    new_color
                )));
            }
            target.recolor(new_color);
        }

        target
            .validate()
            .map_err(|e| BudgetBookError::InvalidArgument(e.to_string()))?;

        self.storage.categories.upsert(target.clone())?;
        self.storage.categories.save()?;

        Ok(target)
    }

    /// Delete a category
    ///
    /// Rejected if any expense still references the category; budget rows
    /// carry no history and are removed along with it.
    pub fn delete(&self, id: CategoryId) -> BudgetBookResult<()> {
        let target = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetBookError::category_not_found(id.to_string()))?;

        let expense_count = self.storage.expenses.count_for_category(id)?;
        if expense_count > 0 {
            return Err(BudgetBookError::DependencyConflict(format!(
                "category '{}' has {} expense{}; delete them first",
                target.name,
                expense_count,
                if expense_count == 1 { "" } else { "s" }
            )));
        }

        self.storage.categories.delete(id)?;
        self.storage.budgets.remove_for_category(id)?;
        self.storage.categories.save()?;
        self.storage.budgets.save()?;

        Ok(())
    }
}
