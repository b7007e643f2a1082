//! Aggregate totals across a list's items

use super::item::ItemMetrics;

/// Element-wise sums of the per-item metrics that matter at the list level
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListTotals {
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_units: f64,
    pub total_cost: f64,
}

impl ListTotals {
    /// Sum per-item metrics; an empty sequence yields all-zero totals
    pub fn aggregate<'a, I>(metrics: I) -> Self
    where
        I: IntoIterator<Item = &'a ItemMetrics>,
    {
        metrics.into_iter().fold(Self::default(), |mut acc, m| {
            acc.total_revenue += m.potential_revenue;
            acc.total_profit += m.potential_profit;
            acc.total_units += m.total_units;
            acc.total_cost += m.total_cost;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BakeSaleItem;

    fn metrics(batches: f64, cost: f64, units: f64, price: f64) -> ItemMetrics {
        let mut item = BakeSaleItem::new();
        item.batches = batches;
        item.cost_per_batch = cost;
        item.units_per_batch = units;
        item.sale_price_per_unit = price;
        ItemMetrics::compute(&item)
    }

    #[test]
    fn test_empty_aggregate_is_zero() {
        let totals = ListTotals::aggregate(std::iter::empty::<&ItemMetrics>());
        assert_eq!(totals, ListTotals::default());
    }

    #[test]
    fn test_aggregate_is_pointwise_sum() {
        let a = metrics(2.0, 5.0, 12.0, 1.0);
        let b = metrics(1.0, 3.0, 6.0, 2.0);
        let totals = ListTotals::aggregate([a, b].iter());

        assert_eq!(totals.total_units, a.total_units + b.total_units);
        assert_eq!(totals.total_cost, a.total_cost + b.total_cost);
        assert_eq!(
            totals.total_revenue,
            a.potential_revenue + b.potential_revenue
        );
        assert_eq!(totals.total_profit, a.potential_profit + b.potential_profit);
    }

    #[test]
    fn test_losses_offset_gains() {
        // One item makes $10, the other loses $5
        let winner = metrics(1.0, 0.0, 10.0, 1.0);
        let loser = metrics(1.0, 10.0, 5.0, 1.0);
        assert_eq!(winner.potential_profit, 10.0);
        assert_eq!(loser.potential_profit, -5.0);

        let totals = ListTotals::aggregate([winner, loser].iter());
        assert_eq!(totals.total_profit, 5.0);
    }
}
