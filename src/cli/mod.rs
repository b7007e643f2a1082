//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod import;
pub mod item;
pub mod list;

pub use export::handle_export_command;
pub use import::handle_import_command;
pub use item::{handle_item_command, ItemCommands};
pub use list::{handle_list_command, ListCommands};

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin; anything but y/yes is a no
pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
