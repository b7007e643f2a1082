//! List view formatting
//!
//! Renders a list's items with their computed metrics as a terminal table,
//! ending in a TOTAL row, matching the columns of the original calculator.

use crate::metrics::{ItemMetrics, ListTotals};
use crate::models::BakeSaleList;

/// Format a monetary amount with the configured symbol and two decimals
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a unit count, dropping the fraction when it is whole
pub fn format_units(units: f64) -> String {
    if (units - units.round()).abs() < 1e-9 {
        format!("{}", units.round() as i64)
    } else {
        format!("{:.1}", units)
    }
}

/// Format a profit margin percentage
fn format_margin(margin: f64) -> String {
    format!("{:.1}%", margin)
}

/// Format a list with per-item metrics and aggregate totals as a table
pub fn format_list_view(
    list: &BakeSaleList,
    metrics: &[ItemMetrics],
    totals: &ListTotals,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("List: {}\n\n", list.name));

    if list.items.is_empty() {
        output.push_str("No items yet.\n");
        return output;
    }

    let name_width = list
        .items
        .iter()
        .map(|i| i.item_name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    output.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>10}  {:>10}  {:>11}  {:>11}  {:>10}  {:>10}  {:>8}  {:>10}  {:>10}\n",
        "Item",
        "Batches",
        "Cost/Batch",
        "Total Cost",
        "Units/Batch",
        "Total Units",
        "Price/Unit",
        "Cost/Unit",
        "Margin",
        "Revenue",
        "Profit",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:->7}  {:->10}  {:->10}  {:->11}  {:->11}  {:->10}  {:->10}  {:->8}  {:->10}  {:->10}\n",
        "", "", "", "", "", "", "", "", "", "", "",
        name_width = name_width,
    ));

    for (item, m) in list.items.iter().zip(metrics) {
        output.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>10}  {:>10}  {:>11}  {:>11}  {:>10}  {:>10}  {:>8}  {:>10}  {:>10}\n",
            item.item_name,
            format_units(item.batches),
            format_currency(item.cost_per_batch, symbol),
            format_currency(m.total_cost, symbol),
            format_units(item.units_per_batch),
            format_units(m.total_units),
            format_currency(item.sale_price_per_unit, symbol),
            format_currency(m.cost_per_unit, symbol),
            format_margin(m.profit_margin),
            format_currency(m.potential_revenue, symbol),
            format_currency(m.potential_profit, symbol),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->7}  {:->10}  {:->10}  {:->11}  {:->11}  {:->10}  {:->10}  {:->8}  {:->10}  {:->10}\n",
        "", "", "", "", "", "", "", "", "", "", "",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>10}  {:>10}  {:>11}  {:>11}  {:>10}  {:>10}  {:>8}  {:>10}  {:>10}\n",
        "TOTAL",
        "",
        "",
        format_currency(totals.total_cost, symbol),
        "",
        format_units(totals.total_units),
        "",
        "",
        "",
        format_currency(totals.total_revenue, symbol),
        format_currency(totals.total_profit, symbol),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics;
    use crate::models::BakeSaleItem;

    fn sample_list() -> BakeSaleList {
        let mut list = BakeSaleList::new("Market");
        let mut cookies = BakeSaleItem::named("Cookies");
        cookies.batches = 2.0;
        cookies.cost_per_batch = 5.0;
        cookies.units_per_batch = 12.0;
        cookies.sale_price_per_unit = 1.0;
        list.items.push(cookies);
        list
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10.5, "$"), "$10.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(-3.25, "$"), "-$3.25");
        assert_eq!(format_currency(2.0, "£"), "£2.00");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(24.0), "24");
        assert_eq!(format_units(0.0), "0");
        assert_eq!(format_units(1.5), "1.5");
    }

    #[test]
    fn test_format_list_view() {
        let list = sample_list();
        let (metrics, totals) = metrics::compute_with_totals(&list);
        let output = format_list_view(&list, &metrics, &totals, "$");

        assert!(output.contains("List: Market"));
        assert!(output.contains("Cookies"));
        assert!(output.contains("$10.00")); // total cost
        assert!(output.contains("58.3%")); // margin
        assert!(output.contains("$24.00")); // revenue
        assert!(output.contains("$14.00")); // profit
        assert!(output.contains("TOTAL"));
    }

    #[test]
    fn test_format_empty_list_view() {
        let list = BakeSaleList::new("Empty");
        let (metrics, totals) = metrics::compute_with_totals(&list);
        let output = format_list_view(&list, &metrics, &totals, "$");

        assert!(output.contains("No items yet."));
        assert!(!output.contains("TOTAL"));
    }
}
