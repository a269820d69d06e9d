//! Category repository for JSON storage
//!
//! Categories are kept in insertion order; listing preserves the order in
//! which the user created them, which the report assembler relies on.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetBookError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), BudgetBookError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self.categories.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *categories = file_data.categories;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), BudgetBookError> {
        let categories = self.categories.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = CategoryData {
            categories: categories.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, BudgetBookError> {
        let categories = self.categories.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(categories.clone())
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, BudgetBookError> {
        let categories = self.categories.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, BudgetBookError> {
        let categories = self.categories.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Insert or replace a category (matched by ID, position preserved)
    pub fn upsert(&self, category: Category) -> Result<(), BudgetBookError> {
        let mut categories = self.categories.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(existing) = categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category;
        } else {
            categories.push(category);
        }

        Ok(())
    }

    /// Delete a category by ID; returns whether anything was removed
    pub fn delete(&self, id: CategoryId) -> Result<bool, BudgetBookError> {
        let mut categories = self.categories.write().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }

    /// Number of stored categories
    pub fn count(&self) -> Result<usize, BudgetBookError> {
        let categories = self.categories.read().map_err(|e| {
            BudgetBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(categories.len())
    }
}
