//! Terminal output formatting
//!
//! Hand-formatted tables for the list overview and the per-item metrics view.

pub mod list;
pub mod metrics;

pub use list::format_list_overview;
pub use metrics::{format_currency, format_list_view};
