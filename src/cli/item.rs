//! CLI commands for item management
//!
//! Numeric field values arrive as raw strings: empty or unparseable input
//! coerces to 0 here at the edge, and the store clamps negatives when the
//! modified list is submitted.

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::{BakeSaleError, BakeSaleResult};
use crate::metrics;
use crate::models::{BakeSaleItem, BakeSaleList};
use crate::services::{ItemService, ListService};
use crate::storage::Storage;

/// Item subcommands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add an item to a list
    Add {
        /// List name or id
        list: String,

        /// Item name
        #[arg(long)]
        name: Option<String>,

        /// Number of batches
        #[arg(long)]
        batches: Option<String>,

        /// Cost to produce one batch
        #[arg(long)]
        cost_per_batch: Option<String>,

        /// Sale units yielded per batch
        #[arg(long)]
        units_per_batch: Option<String>,

        /// Sale price per unit
        #[arg(long)]
        price: Option<String>,
    },

    /// Edit an item's fields
    Edit {
        /// List name or id
        list: String,

        /// Item name or id
        item: String,

        /// New item name
        #[arg(long)]
        name: Option<String>,

        /// Number of batches
        #[arg(long)]
        batches: Option<String>,

        /// Cost to produce one batch
        #[arg(long)]
        cost_per_batch: Option<String>,

        /// Sale units yielded per batch
        #[arg(long)]
        units_per_batch: Option<String>,

        /// Sale price per unit
        #[arg(long)]
        price: Option<String>,
    },

    /// Remove an item from a list
    Rm {
        /// List name or id
        list: String,

        /// Item name or id
        item: String,
    },
}

/// Handle item commands
pub fn handle_item_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ItemCommands,
) -> BakeSaleResult<()> {
    let lists = ListService::new(storage);
    let items = ItemService::new(storage);

    match cmd {
        ItemCommands::Add {
            list,
            name,
            batches,
            cost_per_batch,
            units_per_batch,
            price,
        } => {
            let found = find_list(&lists, &list)?;

            let mut item = BakeSaleItem::new();
            if let Some(name) = name {
                item.item_name = name;
            }
            apply_numeric_fields(
                &mut item,
                batches.as_deref(),
                cost_per_batch.as_deref(),
                units_per_batch.as_deref(),
                price.as_deref(),
            );

            let updated = items.add_item(found.id, item)?;
            render(&updated, settings);
            Ok(())
        }

        ItemCommands::Edit {
            list,
            item,
            name,
            batches,
            cost_per_batch,
            units_per_batch,
            price,
        } => {
            let found = find_list(&lists, &list)?;
            let mut target = found
                .find_item(&item)
                .cloned()
                .ok_or_else(|| BakeSaleError::item_not_found(item.as_str()))?;

            if let Some(name) = name {
                target.item_name = name;
            }
            apply_numeric_fields(
                &mut target,
                batches.as_deref(),
                cost_per_batch.as_deref(),
                units_per_batch.as_deref(),
                price.as_deref(),
            );

            let updated = items.update_item(found.id, target)?;
            render(&updated, settings);
            Ok(())
        }

        ItemCommands::Rm { list, item } => {
            let found = find_list(&lists, &list)?;
            let target = found
                .find_item(&item)
                .cloned()
                .ok_or_else(|| BakeSaleError::item_not_found(item.as_str()))?;

            items.remove_item(found.id, target.id)?;
            println!("Removed item \"{}\" from \"{}\"", target, found.name);
            Ok(())
        }
    }
}

fn find_list(service: &ListService, identifier: &str) -> BakeSaleResult<BakeSaleList> {
    service
        .find(identifier)?
        .ok_or_else(|| BakeSaleError::list_not_found(identifier))
}

fn apply_numeric_fields(
    item: &mut BakeSaleItem,
    batches: Option<&str>,
    cost_per_batch: Option<&str>,
    units_per_batch: Option<&str>,
    price: Option<&str>,
) {
    if let Some(raw) = batches {
        item.batches = parse_field_value(raw);
    }
    if let Some(raw) = cost_per_batch {
        item.cost_per_batch = parse_field_value(raw);
    }
    if let Some(raw) = units_per_batch {
        item.units_per_batch = parse_field_value(raw);
    }
    if let Some(raw) = price {
        item.sale_price_per_unit = parse_field_value(raw);
    }
}

/// Empty or unparseable numeric input becomes 0
fn parse_field_value(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn render(list: &BakeSaleList, settings: &Settings) {
    let (item_metrics, totals) = metrics::compute_with_totals(list);
    print!(
        "{}",
        display::format_list_view(list, &item_metrics, &totals, &settings.currency_symbol)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_value() {
        assert_eq!(parse_field_value("2.5"), 2.5);
        assert_eq!(parse_field_value(" 3 "), 3.0);
        assert_eq!(parse_field_value(""), 0.0);
        assert_eq!(parse_field_value("a dozen"), 0.0);
        // Negative input parses here; the store clamps it on update
        assert_eq!(parse_field_value("-1"), -1.0);
    }

    #[test]
    fn test_apply_numeric_fields_partial() {
        let mut item = BakeSaleItem::new();
        apply_numeric_fields(&mut item, Some("4"), None, Some(""), None);

        assert_eq!(item.batches, 4.0);
        assert_eq!(item.cost_per_batch, 0.0);
        assert_eq!(item.units_per_batch, 0.0); // empty input coerces to 0
        assert_eq!(item.sale_price_per_unit, 0.0);
    }
}
