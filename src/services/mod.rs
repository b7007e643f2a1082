//! Business logic layer
//!
//! Services bridge the CLI handlers and the storage layer: list CRUD and
//! import adoption, item-level edits routed through wholesale list updates,
//! and import file validation.

pub mod import;
pub mod item;
pub mod list;

pub use import::{import_list_from_path, parse_list_import, ListImport};
pub use item::ItemService;
pub use list::ListService;
