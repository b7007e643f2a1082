//! User settings for bakesale-cli
//!
//! Small knobs: the currency symbol used for display, and whether destructive
//! commands ask for confirmation.

use serde::{Deserialize, Serialize};

use super::paths::BakeSalePaths;
use crate::error::BakeSaleError;
use crate::storage::file_io::{load_json, store_json_atomic};

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_confirm_delete() -> bool {
    true
}

/// User settings for bakesale-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to monetary output
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Whether `list delete` and `reset` prompt before acting
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults when missing
    pub fn load_or_create(paths: &BakeSalePaths) -> Result<Self, BakeSaleError> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        load_json(&path)
            .map_err(|e| BakeSaleError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BakeSalePaths) -> Result<(), BakeSaleError> {
        store_json_atomic(paths.settings_file(), self)
            .map_err(|e| BakeSaleError::Config(format!("Failed to save settings: {}", e)))
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
        assert!(settings.confirm_delete);
    }

    #[test]
    fn test_load_or_create_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BakeSalePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        assert!(!paths.settings_file().exists());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BakeSalePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut settings = Settings::default();
        settings.currency_symbol = "£".to_string();
        settings.confirm_delete = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BakeSalePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), "{}").unwrap();
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.confirm_delete);
    }
}
