//! Per-item profitability metrics
//!
//! Pure derivation of financial figures from a single item's raw fields.
//! Inputs are already-normalized non-negative numbers, so every computation
//! is total: degenerate yields and zero prices produce zeros, never NaN.

use crate::models::BakeSaleItem;

/// Financial metrics derived from one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Total sale units produced; zero unless both factors are positive
    pub total_units: f64,

    /// Total production cost across all batches
    pub total_cost: f64,

    /// Production cost per sale unit; zero when the batch yields nothing
    pub cost_per_unit: f64,

    /// Profit made on each unit sold at the asking price
    pub profit_per_unit: f64,

    /// Profit as a percentage of the sale price; zero when nothing is charged
    pub profit_margin: f64,

    /// Revenue if every unit sells
    pub potential_revenue: f64,

    /// Profit if every unit sells
    pub potential_profit: f64,
}

impl ItemMetrics {
    /// Compute the metrics for one item
    pub fn compute(item: &BakeSaleItem) -> Self {
        let total_units = if item.batches > 0.0 && item.units_per_batch > 0.0 {
            item.batches * item.units_per_batch
        } else {
            0.0
        };

        let total_cost = item.batches * item.cost_per_batch;

        let cost_per_unit = if item.units_per_batch > 0.0 {
            item.cost_per_batch / item.units_per_batch
        } else {
            0.0
        };

        let profit_per_unit = item.sale_price_per_unit - cost_per_unit;

        let profit_margin = if item.sale_price_per_unit > 0.0 {
            (profit_per_unit / item.sale_price_per_unit) * 100.0
        } else {
            0.0
        };

        let potential_revenue = total_units * item.sale_price_per_unit;
        let potential_profit = total_units * profit_per_unit;

        Self {
            total_units,
            total_cost,
            cost_per_unit,
            profit_per_unit,
            profit_margin,
            potential_revenue,
            potential_profit,
        }
    }
}
