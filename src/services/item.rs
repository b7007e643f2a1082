//! Item service
//!
//! Item-level mutations never touch the store directly: each operation takes
//! a snapshot of the owning list, computes a modified copy, and submits it
//! wholesale through `ListService::update`.

use crate::error::{BakeSaleError, BakeSaleResult};
use crate::models::{BakeSaleItem, BakeSaleList, ItemId, ListId};
use crate::services::ListService;
use crate::storage::Storage;

/// Service for item management within a list
pub struct ItemService<'a> {
    storage: &'a Storage,
}

impl<'a> ItemService<'a> {
    /// Create a new item service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append an item to a list. Returns the updated list.
    pub fn add_item(&self, list_id: ListId, item: BakeSaleItem) -> BakeSaleResult<BakeSaleList> {
        let mut list = self.owning_list(list_id)?;
        list.items.push(item);

        let lists = ListService::new(self.storage);
        lists.update(list.clone())?;
        // Read back so the caller sees normalized values
        lists
            .get(list.id)?
            .ok_or_else(|| BakeSaleError::list_not_found(list_id.to_string()))
    }

    /// Replace the item with a matching id inside a list.
    /// Returns the updated list, or NotFound when the item is absent.
    pub fn update_item(&self, list_id: ListId, item: BakeSaleItem) -> BakeSaleResult<BakeSaleList> {
        let mut list = self.owning_list(list_id)?;

        let Some(slot) = list.items.iter_mut().find(|i| i.id == item.id) else {
            return Err(BakeSaleError::item_not_found(item.id.to_string()));
        };
        *slot = item;

        let lists = ListService::new(self.storage);
        lists.update(list.clone())?;
        lists
            .get(list.id)?
            .ok_or_else(|| BakeSaleError::list_not_found(list_id.to_string()))
    }

    /// Remove the item with a matching id from a list.
    /// Removing an absent item is a no-op (returns false).
    pub fn remove_item(&self, list_id: ListId, item_id: ItemId) -> BakeSaleResult<bool> {
        let mut list = self.owning_list(list_id)?;

        let before = list.items.len();
        list.items.retain(|i| i.id != item_id);
        if list.items.len() == before {
            return Ok(false);
        }

        ListService::new(self.storage).update(list)?;
        Ok(true)
    }

    fn owning_list(&self, list_id: ListId) -> BakeSaleResult<BakeSaleList> {
        self.storage
            .lists
            .get(list_id)?
            .ok_or_else(|| BakeSaleError::list_not_found(list_id.to_string()))
    }
}
