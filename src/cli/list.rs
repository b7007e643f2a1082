//! CLI commands for list management

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::{BakeSaleError, BakeSaleResult};
use crate::metrics;
use crate::services::ListService;
use crate::storage::Storage;

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Create a new empty list
    Add {
        /// List name
        name: String,
    },

    /// Show all lists
    Ls,

    /// Open a list and show its items with computed metrics
    Show {
        /// List name or id
        list: String,
    },

    /// Rename a list
    Rename {
        /// List name or id
        list: String,
        /// New name
        new_name: String,
    },

    /// Delete a list
    Delete {
        /// List name or id
        list: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle list commands
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ListCommands,
) -> BakeSaleResult<()> {
    let service = ListService::new(storage);

    match cmd {
        ListCommands::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(BakeSaleError::Validation(
                    "List name cannot be empty".into(),
                ));
            }

            let list = service.create(name)?;
            println!("Created list \"{}\" ({})", list.name, list.id);
            Ok(())
        }

        ListCommands::Ls => {
            print!("{}", display::format_list_overview(&service.snapshot()?));
            Ok(())
        }

        ListCommands::Show { list } => {
            let found = service
                .find(&list)?
                .ok_or_else(|| BakeSaleError::list_not_found(list.as_str()))?;
            service.select(Some(found.id))?;

            let (item_metrics, totals) = metrics::compute_with_totals(&found);
            print!(
                "{}",
                display::format_list_view(&found, &item_metrics, &totals, &settings.currency_symbol)
            );
            Ok(())
        }

        ListCommands::Rename { list, new_name } => {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(BakeSaleError::Validation(
                    "List name cannot be empty".into(),
                ));
            }

            let found = service
                .find(&list)?
                .ok_or_else(|| BakeSaleError::list_not_found(list.as_str()))?;
            service.rename(found.id, new_name)?;
            println!("Renamed \"{}\" to \"{}\"", found.name, new_name);
            Ok(())
        }

        ListCommands::Delete { list, yes } => {
            let found = service
                .find(&list)?
                .ok_or_else(|| BakeSaleError::list_not_found(list.as_str()))?;

            if !yes
                && settings.confirm_delete
                && !super::confirm(&format!("Delete list \"{}\"?", found.name))
            {
                println!("Aborted.");
                return Ok(());
            }

            service.delete(found.id)?;
            println!("Deleted list \"{}\"", found.name);
            Ok(())
        }
    }
}
