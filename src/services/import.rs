//! List import validation
//!
//! Takes a file path or raw bytes through the gauntlet: file-extension check,
//! UTF-8 decode, JSON parse, and shape validation. On success it returns a
//! candidate the store can adopt; the store mints the list id, so a candidate
//! never carries one. Any failure aborts the import with the store untouched.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{BakeSaleError, BakeSaleResult};
use crate::models::{BakeSaleItem, ItemId};

/// A validated import candidate, before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct ListImport {
    pub name: String,
    pub items: Vec<BakeSaleItem>,
}

/// Validate and read an import file from disk.
///
/// The extension gate runs before any read attempt, standing in for the
/// original's media-type check on dropped files.
pub fn import_list_from_path(path: &Path) -> BakeSaleResult<ListImport> {
    check_media_type(path)?;

    let bytes = fs::read(path)
        .map_err(|e| BakeSaleError::Import(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_list_import(&bytes)
}

/// Reject files that do not carry a `.json` extension
pub fn check_media_type(path: &Path) -> BakeSaleResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(()),
        _ => Err(BakeSaleError::MediaType(format!(
            "{} does not look like a .json file",
            path.display()
        ))),
    }
}

/// Decode, parse, and validate raw import bytes
pub fn parse_list_import(bytes: &[u8]) -> BakeSaleResult<ListImport> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| BakeSaleError::Parse(format!("File is not UTF-8 text: {}", e)))?;

    let value: Value = serde_json::from_str(text)
        .map_err(|e| BakeSaleError::Parse(format!("File is not valid JSON: {}", e)))?;

    let obj = value
        .as_object()
        .ok_or_else(|| BakeSaleError::Schema("top-level value must be an object".into()))?;

    let name = obj
        .get("name")
        .ok_or_else(|| BakeSaleError::Schema("missing required field: name".into()))?
        .as_str()
        .ok_or_else(|| BakeSaleError::Schema("field \"name\" must be a string".into()))?
        .to_string();

    let items = obj
        .get("items")
        .ok_or_else(|| BakeSaleError::Schema("missing required field: items".into()))?
        .as_array()
        .ok_or_else(|| BakeSaleError::Schema("field \"items\" must be an array".into()))?;

    let items = items
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_item_record(index, raw))
        .collect::<BakeSaleResult<Vec<_>>>()?;

    Ok(ListImport { name, items })
}

/// Validate one item record.
///
/// Recognized fields must carry the right JSON type when present; missing
/// fields default. An inbound item id is kept only when it parses as a UUID,
/// otherwise a fresh one is minted (exported files from other tools may use
/// arbitrary id strings).
fn parse_item_record(index: usize, value: &Value) -> BakeSaleResult<BakeSaleItem> {
    let obj = value
        .as_object()
        .ok_or_else(|| BakeSaleError::Schema(format!("item {} must be an object", index)))?;

    let id = match obj.get("id") {
        None | Some(Value::Null) => ItemId::new(),
        Some(Value::String(s)) => s.parse().unwrap_or_else(|_| ItemId::new()),
        Some(_) => {
            return Err(BakeSaleError::Schema(format!(
                "item {}: field \"id\" must be a string",
                index
            )))
        }
    };

    let item_name = match obj.get("itemName") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(BakeSaleError::Schema(format!(
                "item {}: field \"itemName\" must be a string",
                index
            )))
        }
    };

    Ok(BakeSaleItem {
        id,
        item_name,
        batches: numeric_field(obj, "batches", index)?,
        cost_per_batch: numeric_field(obj, "costPerBatch", index)?,
        units_per_batch: numeric_field(obj, "unitsPerBatch", index)?,
        sale_price_per_unit: numeric_field(obj, "salePricePerUnit", index)?,
    })
}

fn numeric_field(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    index: usize,
) -> BakeSaleResult<f64> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => value.as_f64().ok_or_else(|| {
            BakeSaleError::Schema(format!("item {}: field \"{}\" must be a number", index, key))
        }),
    }
}
