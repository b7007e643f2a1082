//! List service
//!
//! The operation surface of the collection store: create, delete, update,
//! rename, and import lists. Every mutation persists the full collection to
//! the session file; persistence is fire-and-forget, so a failed write is
//! logged and the operation still succeeds.

use crate::error::BakeSaleResult;
use crate::models::{BakeSaleList, ListId};
use crate::services::import::ListImport;
use crate::storage::Storage;

/// Service for list management
pub struct ListService<'a> {
    storage: &'a Storage,
}

impl<'a> ListService<'a> {
    /// Create a new list service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new empty list with a fresh id, appended to the collection.
    ///
    /// The store does not validate the name; callers that want to forbid
    /// empty names do so before calling.
    pub fn create(&self, name: &str) -> BakeSaleResult<BakeSaleList> {
        let list = BakeSaleList::new(name);
        self.storage.lists.append(list.clone())?;
        self.persist();
        Ok(list)
    }

    /// Delete the list with a matching id.
    ///
    /// A no-op (returns false, not an error) when the id is absent. When the
    /// deleted list was the one being viewed, the selection clears and the
    /// viewer is back at the overview.
    pub fn delete(&self, id: ListId) -> BakeSaleResult<bool> {
        let removed = self.storage.lists.remove(id)?;
        if removed {
            self.persist();
        }
        Ok(removed)
    }

    /// Replace the list with a matching id wholesale.
    ///
    /// All item-level mutations route through here: the caller computes a
    /// modified copy of the list and submits it. Numeric fields on every item
    /// are normalized before storage, keeping the non-negative invariant in
    /// one place. A no-op (returns false) when the id is absent.
    pub fn update(&self, mut list: BakeSaleList) -> BakeSaleResult<bool> {
        for item in &mut list.items {
            item.normalize();
        }

        let replaced = self.storage.lists.replace(list)?;
        if replaced {
            self.persist();
        }
        Ok(replaced)
    }

    /// Rename a list, preserving its items and position
    pub fn rename(&self, id: ListId, name: &str) -> BakeSaleResult<bool> {
        let Some(mut list) = self.storage.lists.get(id)? else {
            return Ok(false);
        };

        list.name = name.to_string();
        self.update(list)
    }

    /// Adopt a validated import candidate: mint a fresh id (the inbound id,
    /// if any, is never trusted), normalize its items, append, persist.
    pub fn import(&self, candidate: ListImport) -> BakeSaleResult<BakeSaleList> {
        let mut list = BakeSaleList::new(candidate.name);
        list.items = candidate.items;
        for item in &mut list.items {
            item.normalize();
        }

        self.storage.lists.append(list.clone())?;
        self.persist();
        Ok(list)
    }

    /// Get a list by id
    pub fn get(&self, id: ListId) -> BakeSaleResult<Option<BakeSaleList>> {
        self.storage.lists.get(id)
    }

    /// Find a list by name (case-insensitive) or id string
    pub fn find(&self, identifier: &str) -> BakeSaleResult<Option<BakeSaleList>> {
        if let Some(list) = self.storage.lists.get_by_name(identifier)? {
            return Ok(Some(list));
        }

        if let Ok(id) = identifier.parse::<ListId>() {
            return self.storage.lists.get(id);
        }

        Ok(None)
    }

    /// Snapshot of all lists in display order
    pub fn snapshot(&self) -> BakeSaleResult<Vec<BakeSaleList>> {
        self.storage.lists.snapshot()
    }

    /// Mark a list as currently viewed
    pub fn select(&self, id: Option<ListId>) -> BakeSaleResult<()> {
        self.storage.lists.select(id)
    }

    /// The currently viewed list id, if any
    pub fn selected(&self) -> BakeSaleResult<Option<ListId>> {
        self.storage.lists.selected()
    }

    /// Persist the collection, fire-and-forget
    fn persist(&self) {
        if let Err(e) = self.storage.lists.save() {
            tracing::warn!(error = %e, "failed to persist session state");
        }
    }
}
