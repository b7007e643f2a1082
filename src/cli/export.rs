//! CLI command for exporting a list to a JSON file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BakeSaleError, BakeSaleResult};
use crate::export::{export_filename, export_list_json};
use crate::services::ListService;
use crate::storage::Storage;

/// Handle the export command. The filename derives from the list name; the
/// caller only picks the directory.
pub fn handle_export_command(
    storage: &Storage,
    list: String,
    dir: Option<PathBuf>,
) -> BakeSaleResult<()> {
    let service = ListService::new(storage);
    let found = service
        .find(&list)?
        .ok_or_else(|| BakeSaleError::list_not_found(list.as_str()))?;

    let filename = export_filename(&found.name);
    let output = dir.unwrap_or_else(|| PathBuf::from(".")).join(filename);

    let file = File::create(&output).map_err(|e| {
        BakeSaleError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_list_json(&found, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BakeSaleError::Export(format!("Failed to write export: {}", e)))?;

    println!("Exported \"{}\" to: {}", found.name, output.display());
    Ok(())
}
