//! Custom error types for bakesale-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for bakesale-cli operations
#[derive(Error, Debug)]
pub enum BakeSaleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import file is not decodable text or not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Parsed import JSON does not have the required list shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Import file does not look like a JSON file
    #[error("Unsupported file type: {0}")]
    MediaType(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BakeSaleError {
    /// Create a "not found" error for lists
    pub fn list_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "List",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is one of the import rejection errors
    /// (media type, parse, or schema)
    pub fn is_import_rejection(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Schema(_) | Self::MediaType(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BakeSaleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BakeSaleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bakesale-cli operations
pub type BakeSaleResult<T> = Result<T, BakeSaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BakeSaleError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BakeSaleError::list_not_found("Saturday Market");
        assert_eq!(err.to_string(), "List not found: Saturday Market");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_import_rejection() {
        assert!(BakeSaleError::Parse("bad json".into()).is_import_rejection());
        assert!(BakeSaleError::Schema("items missing".into()).is_import_rejection());
        assert!(BakeSaleError::MediaType("foo.txt".into()).is_import_rejection());
        assert!(!BakeSaleError::Storage("disk full".into()).is_import_rejection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BakeSaleError = io_err.into();
        assert!(matches!(err, BakeSaleError::Io(_)));
    }
}
