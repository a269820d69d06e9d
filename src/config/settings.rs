//! User settings for BudgetBook
//!
//! Manages user preferences persisted as JSON alongside the data files.

use serde::{Deserialize, Serialize};

use super::paths::BudgetBookPaths;
use crate::error::BudgetBookError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for BudgetBook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many rows the recent-expenses view shows
    #[serde(default = "default_recent_expense_limit")]
    pub recent_expense_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_expense_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_expense_limit: default_recent_expense_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if absent
    pub fn load_or_create(paths: &BudgetBookPaths) -> Result<Self, BudgetBookError> {
        if paths.settings_file().exists() {
            read_json(paths.settings_file())
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetBookPaths) -> Result<(), BudgetBookError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_expense_limit, 10);
    }

    #[test]
    fn test_load_or_create_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetBookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.recent_expense_limit = 25;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.recent_expense_limit, 25);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.recent_expense_limit, 10);
    }
}
