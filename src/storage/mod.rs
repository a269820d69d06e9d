//! Storage layer for BudgetBook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each entity type has its own repository and data file.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use crate::config::paths::BudgetBookPaths;
use crate::error::BudgetBookError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetBookPaths,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetBookPaths) -> Result<Self, BudgetBookError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetBookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetBookError> {
        self.categories.load()?;
        self.budgets.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetBookError> {
        self.categories.save()?;
        self.budgets.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.categories_file().exists()
    }
}
