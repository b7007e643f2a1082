//! Profitability metrics
//!
//! Pure, stateless derivation of per-item financial figures and list-level
//! aggregate totals. No side effects; total over already-normalized inputs.

pub mod item;
pub mod totals;

pub use item::ItemMetrics;
pub use totals::ListTotals;

use crate::models::BakeSaleList;

/// Compute the metrics for every item in a list, in item order
pub fn compute_all(list: &BakeSaleList) -> Vec<ItemMetrics> {
    list.items.iter().map(ItemMetrics::compute).collect()
}

/// Compute per-item metrics and the aggregate totals for a list
pub fn compute_with_totals(list: &BakeSaleList) -> (Vec<ItemMetrics>, ListTotals) {
    let metrics = compute_all(list);
    let totals = ListTotals::aggregate(&metrics);
    (metrics, totals)
}
