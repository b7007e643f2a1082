//! Bake sale item model
//!
//! Represents a single product line: how many batches get baked, what a batch
//! costs, how many sale units it yields, and the asking price per unit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;

/// A single product line in a bake sale list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakeSaleItem {
    /// Unique identifier, assigned at creation
    pub id: ItemId,

    /// Product label (e.g. "Cookies"); may be empty
    #[serde(default)]
    pub item_name: String,

    /// Number of production batches
    #[serde(default)]
    pub batches: f64,

    /// Cost to produce one batch
    #[serde(default)]
    pub cost_per_batch: f64,

    /// Sale units yielded per batch
    #[serde(default)]
    pub units_per_batch: f64,

    /// Asking price per sale unit
    #[serde(default)]
    pub sale_price_per_unit: f64,
}

impl BakeSaleItem {
    /// Create a new item with the default field values
    /// (one batch yielding one unit, zero cost and price)
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            item_name: String::new(),
            batches: 1.0,
            cost_per_batch: 0.0,
            units_per_batch: 1.0,
            sale_price_per_unit: 0.0,
        }
    }

    /// Create a new item with a name and the remaining defaults
    pub fn named(name: impl Into<String>) -> Self {
        let mut item = Self::new();
        item.item_name = name.into();
        item
    }

    /// Clamp every numeric field to a finite, non-negative value.
    ///
    /// Invariant: stored numeric fields are never negative, NaN, or infinite.
    /// Anything outside that range becomes 0, matching how the edit boundary
    /// treats empty or unparseable input.
    pub fn normalize(&mut self) {
        self.batches = sanitize(self.batches);
        self.cost_per_batch = sanitize(self.cost_per_batch);
        self.units_per_batch = sanitize(self.units_per_batch);
        self.sale_price_per_unit = sanitize(self.sale_price_per_unit);
    }

    /// Return a normalized copy of this item
    pub fn normalized(&self) -> Self {
        let mut item = self.clone();
        item.normalize();
        item
    }
}

impl Default for BakeSaleItem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BakeSaleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item_name.is_empty() {
            write!(f, "(unnamed item)")
        } else {
            write!(f, "{}", self.item_name)
        }
    }
}

/// Coerce a value to a finite, non-negative number
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
