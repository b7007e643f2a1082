//! Session-scoped list repository
//!
//! Owns the authoritative, insertion-ordered collection of bake sale lists.
//! Every read hands out clones; every mutation goes through the service layer
//! which persists the full collection afterwards. The repository also carries
//! the in-memory view cursor (which list is currently "open"); that cursor is
//! never persisted.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BakeSaleError;
use crate::models::{BakeSaleList, ListId};

use super::file_io::{load_json, store_json_atomic};

/// Repository for the session's list collection
pub struct ListRepository {
    path: PathBuf,
    data: RwLock<Vec<BakeSaleList>>,
    selected: RwLock<Option<ListId>>,
}

impl ListRepository {
    /// Create a new repository backed by the given session file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            selected: RwLock::new(None),
        }
    }

    /// Load the collection from the session file.
    ///
    /// A missing file yields an empty collection. A file that exists but
    /// fails to parse also yields an empty collection: session state is
    /// best-effort, so corruption is logged and discarded rather than
    /// surfaced to the user.
    pub fn load(&self) -> Result<(), BakeSaleError> {
        let lists: Vec<BakeSaleList> = match load_json(&self.path) {
            Ok(lists) => lists,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable session state");
                Vec::new()
            }
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = lists;

        Ok(())
    }

    /// Save the full collection to the session file
    pub fn save(&self) -> Result<(), BakeSaleError> {
        let data = self
            .data
            .read()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        store_json_atomic(&self.path, &*data)
    }

    /// Get a snapshot of all lists, in insertion order
    pub fn snapshot(&self) -> Result<Vec<BakeSaleList>, BakeSaleError> {
        let data = self
            .data
            .read()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get a list by id
    pub fn get(&self, id: ListId) -> Result<Option<BakeSaleList>, BakeSaleError> {
        let data = self
            .data
            .read()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|l| l.id == id).cloned())
    }

    /// Get the first list matching a name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<BakeSaleList>, BakeSaleError> {
        let data = self
            .data
            .read()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let lower = name.to_lowercase();
        Ok(data
            .iter()
            .find(|l| l.name.to_lowercase() == lower)
            .cloned())
    }

    /// Append a list to the end of the collection
    pub fn append(&self, list: BakeSaleList) -> Result<(), BakeSaleError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(list);
        Ok(())
    }

    /// Replace the list with a matching id, keeping its position.
    /// Returns false (a no-op, not an error) when the id is absent.
    pub fn replace(&self, list: BakeSaleList) -> Result<bool, BakeSaleError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|l| l.id == list.id) {
            Some(slot) => {
                *slot = list;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the list with a matching id.
    /// Clears the selection when the removed list was selected, returning the
    /// viewer to the overview state. Returns false when the id is absent.
    pub fn remove(&self, id: ListId) -> Result<bool, BakeSaleError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|l| l.id != id);
        let removed = data.len() < before;

        if removed {
            let mut selected = self.selected.write().map_err(|e| {
                BakeSaleError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            if *selected == Some(id) {
                *selected = None;
            }
        }

        Ok(removed)
    }

    /// Mark a list as the one currently being viewed (or none)
    pub fn select(&self, id: Option<ListId>) -> Result<(), BakeSaleError> {
        let mut selected = self
            .selected
            .write()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *selected = id;
        Ok(())
    }

    /// The currently viewed list, if any
    pub fn selected(&self) -> Result<Option<ListId>, BakeSaleError> {
        let selected = self
            .selected
            .read()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*selected)
    }

    /// Number of lists in the collection
    pub fn count(&self) -> Result<usize, BakeSaleError> {
        let data = self
            .data
            .read()
            .map_err(|e| BakeSaleError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
