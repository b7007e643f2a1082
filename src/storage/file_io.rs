//! JSON file helpers with atomic writes
//!
//! A write is either complete or absent: data is serialized to a sibling
//! temp file first and renamed into place.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BakeSaleError;

/// Read JSON from a file, returning a default value if the file is missing.
/// A file that exists but fails to parse is an error; callers that want
/// silent recovery handle that themselves.
pub fn load_json<T, P>(path: P) -> Result<T, BakeSaleError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let bytes = fs::read(path)
        .map_err(|e| BakeSaleError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| BakeSaleError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (serialize, write temp, rename)
pub fn store_json_atomic<T, P>(path: P, data: &T) -> Result<(), BakeSaleError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BakeSaleError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| BakeSaleError::Storage(format!("Failed to serialize data: {}", e)))?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, bytes).map_err(|e| {
        BakeSaleError::Storage(format!(
            "Failed to write temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BakeSaleError::Storage(format!("Failed to rename temp file: {}", e))
    })
}

/// Check whether a file exists and parses as JSON
pub fn is_valid_json<P: AsRef<Path>>(path: P) -> bool {
    match fs::read(path) {
        Ok(bytes) => serde_json::from_slice::<serde_json::Value>(&bytes).is_ok(),
        Err(_) => false,
    }
}
