use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, prelude::*, EnvFilter};

use bakesale_cli::cli::{
    confirm, handle_export_command, handle_import_command, handle_item_command,
    handle_list_command, ItemCommands, ListCommands,
};
use bakesale_cli::config::{BakeSalePaths, Settings};
use bakesale_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bakesale",
    version,
    about = "Command-line bake sale profitability calculator",
    long_about = "Track bake sale lists from the terminal: add product line items \
                  with batch costs and sale prices, and see computed per-item and \
                  aggregate profitability. Lists live for the session and can be \
                  exported to or imported from JSON files."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List management commands
    #[command(subcommand)]
    List(ListCommands),

    /// Item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Import a list from a JSON file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Export a list to a JSON file
    Export {
        /// List name or id
        list: String,

        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Clear the session, deleting all lists
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let paths = BakeSalePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::List(cmd)) => handle_list_command(&storage, &settings, cmd)?,
        Some(Commands::Item(cmd)) => handle_item_command(&storage, &settings, cmd)?,
        Some(Commands::Import { file }) => handle_import_command(&storage, file)?,
        Some(Commands::Export { list, dir }) => handle_export_command(&storage, list, dir)?,
        Some(Commands::Reset { yes }) => handle_reset(&storage, &settings, yes)?,
        Some(Commands::Config) => handle_config(&storage, &settings),
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let (level_filter, level) = if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::WARN, "warn")
    };
    let app_filter = Targets::new().with_target("bakesale_cli", level_filter);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().without_time())
        .with(app_filter)
        .with(env_filter)
        .init();
}

fn handle_reset(storage: &Storage, settings: &Settings, yes: bool) -> Result<()> {
    if !yes && settings.confirm_delete && !confirm("Delete all session lists?") {
        println!("Aborted.");
        return Ok(());
    }

    let lists_file = storage.paths().lists_file();
    if lists_file.exists() {
        std::fs::remove_file(&lists_file)?;
    }
    println!("Session cleared.");
    Ok(())
}

fn handle_config(storage: &Storage, settings: &Settings) {
    let paths = storage.paths();
    println!("Configuration");
    println!("=============\n");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Session file:    {}", paths.lists_file().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Currency symbol: {}", settings.currency_symbol);
    println!(
        "Confirm deletes: {}",
        if settings.confirm_delete { "yes" } else { "no" }
    );
}
