//! Storage layer for bakesale-cli
//!
//! Session-scoped JSON file storage with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod session;

pub use file_io::{load_json, store_json_atomic};
pub use session::ListRepository;

use crate::config::paths::BakeSalePaths;
use crate::error::BakeSaleError;

/// Storage coordinator owning the session repository
pub struct Storage {
    paths: BakeSalePaths,
    pub lists: ListRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BakeSalePaths) -> Result<Self, BakeSaleError> {
        paths.ensure_directories()?;

        Ok(Self {
            lists: ListRepository::new(paths.lists_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BakeSalePaths {
        &self.paths
    }

    /// Load session state from disk
    pub fn load_all(&mut self) -> Result<(), BakeSaleError> {
        self.lists.load()
    }

    /// Save session state to disk
    pub fn save_all(&self) -> Result<(), BakeSaleError> {
        self.lists.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BakeSalePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("session").exists());
        assert_eq!(storage.lists.count().unwrap(), 0);
    }
}
