//! Export functionality

pub mod json;

pub use json::{export_filename, export_list_json};
