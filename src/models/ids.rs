//! Strongly-typed ID wrappers for the entity types
//!
//! Using newtype wrappers prevents accidentally mixing up list and item IDs
//! at compile time. IDs are random UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping the display prefix
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ListId, "list-");
define_id!(ItemId, "item-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_id_creation() {
        let id = ListId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = ListId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("list-"));
        assert_eq!(display.len(), 13); // "list-" + 8 chars
    }

    #[test]
    fn test_id_uniqueness() {
        let id1 = ItemId::new();
        let id2 = ItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_serialization() {
        let id = ListId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ListId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ItemId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        // Non-UUID tokens (e.g. the original app's timestamp strings) fail
        assert!(ItemId::parse("1692034000000").is_err());
    }

    #[test]
    fn test_id_from_str_with_prefix() {
        let id = ListId::new();
        let full = id.as_uuid().to_string();

        let parsed: ListId = full.parse().unwrap();
        assert_eq!(parsed, id);

        let prefixed = format!("list-{}", full);
        let parsed: ListId = prefixed.parse().unwrap();
        assert_eq!(parsed, id);
    }
}
