//! Storage initialization
//!
//! Handles first-run setup and starter category creation.

use crate::config::paths::BudgetBookPaths;
use crate::error::BudgetBookError;
use crate::models::Category;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Starter categories seeded on first run, (name, color)
const STARTER_CATEGORIES: &[(&str, &str)] = &[
    ("Groceries", "#10B981"),
    ("Transport", "#3B82F6"),
    ("Dining Out", "#F59E0B"),
    ("Entertainment", "#8B5CF6"),
    ("Utilities", "#EF4444"),
];

/// Initialize storage for a fresh installation
///
/// Creates the data directories and seeds starter categories.
pub fn initialize_storage(paths: &BudgetBookPaths) -> Result<(), BudgetBookError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        create_starter_categories(paths)?;
    }

    Ok(())
}

/// Create the starter categories file
fn create_starter_categories(paths: &BudgetBookPaths) -> Result<(), BudgetBookError> {
    let categories: Vec<Category> = STARTER_CATEGORIES
        .iter()
        .map(|(name, color)| Category::new(*name, *color))
        .collect();

    let data = CategoryData { categories };
    write_json_atomic(paths.categories_file(), &data)?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgetBookPaths) -> bool {
    !paths.categories_file().exists()
}
