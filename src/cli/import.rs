//! CLI command for importing a list from a JSON file

use std::path::PathBuf;

use crate::error::BakeSaleResult;
use crate::services::{import_list_from_path, ListService};
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: PathBuf) -> BakeSaleResult<()> {
    let candidate = import_list_from_path(&file)?;
    let list = ListService::new(storage).import(candidate)?;

    println!("Successfully imported list: \"{}\"", list.name);
    println!("{} item(s), id {}", list.item_count(), list.id);
    Ok(())
}
