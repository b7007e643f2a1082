//! Path management for bakesale-cli
//!
//! Provides XDG-compliant path resolution for configuration and session data.
//!
//! ## Path Resolution Order
//!
//! 1. `BAKESALE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/bakesale-cli` or `~/.config/bakesale-cli`
//! 3. Windows: `%APPDATA%\bakesale-cli`

use std::path::PathBuf;

use crate::error::BakeSaleError;

/// Manages all paths used by bakesale-cli
#[derive(Debug, Clone)]
pub struct BakeSalePaths {
    /// Base directory for all bakesale-cli data
    base_dir: PathBuf,
}

impl BakeSalePaths {
    /// Create a new BakeSalePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BakeSaleError> {
        let base_dir = if let Ok(custom) = std::env::var("BAKESALE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BakeSalePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the session directory, the stand-in for browser session storage
    pub fn session_dir(&self) -> PathBuf {
        self.base_dir.join("session")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session list collection
    pub fn lists_file(&self) -> PathBuf {
        self.session_dir().join("lists.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BakeSaleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BakeSaleError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.session_dir())
            .map_err(|e| BakeSaleError::Io(format!("Failed to create session directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BakeSaleError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("bakesale-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BakeSaleError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BakeSaleError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("bakesale-cli"))
}
