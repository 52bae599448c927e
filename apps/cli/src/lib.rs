//! # Grocer CLI Library
//!
//! Core library for the `grocer` command. `main.rs` only parses arguments
//! and hands off to [`run`].
//!
//! ## Module Organization
//! ```text
//! grocer_cli/
//! ├── lib.rs          ◄─── You are here (argument model & run)
//! ├── config.rs       ◄─── config.toml + GROCER_* overrides
//! ├── render.rs       ◄─── Tables and receipts
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── item.rs     ◄─── items, add, search, edit, options
//! │   └── bill.rs     ◄─── bill, bills
//! └── error.rs        ◄─── CliError + exit codes
//! ```
//!
//! ## Usage
//! ```text
//! grocer add --name Apple --category Fruits --quantity "1 kg" --price 50
//! grocer search apple
//! grocer edit apple --price 60
//! grocer bill --customer Asha --item Apple=3 --item Milk
//! grocer bills --oldest-first
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grocer_core::{Category, ItemDraft, LineSelection, QuantityLabel};
use grocer_store::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::item::ItemChanges;
use config::{AppConfig, DisplayConfig, DEFAULT_LOG_FILTER};
use error::CliResult;

/// Grocery inventory and billing.
#[derive(Debug, Parser)]
#[command(name = "grocer", version, about = "Grocery inventory and billing", long_about = None)]
pub struct Cli {
    /// Config file (default: platform config dir/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the item and bill snapshots
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every item in the catalog
    Items {
        /// Print only the names, one per line
        #[arg(long)]
        names: bool,
    },

    /// Add an item to the catalog
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "Other")]
        category: Category,

        #[arg(long, default_value = "1 kg")]
        quantity: QuantityLabel,

        /// Unit price in whole currency units
        #[arg(long, allow_negative_numbers = true)]
        price: i64,
    },

    /// Look up an item by name (case-insensitive)
    Search { name: String },

    /// Change an item; omitted flags keep their current values
    Edit {
        /// Current name of the item
        name: String,

        /// New name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        quantity: Option<QuantityLabel>,

        #[arg(long, allow_negative_numbers = true)]
        price: Option<i64>,
    },

    /// Generate a bill and print the receipt
    Bill {
        #[arg(long)]
        customer: String,

        /// Item to bill, repeatable; QTY defaults to 1
        #[arg(
            long = "item",
            value_name = "NAME[=QTY]",
            value_parser = commands::bill::parse_selection
        )]
        items: Vec<LineSelection>,
    },

    /// Show issued bills with their lines (newest first)
    Bills {
        #[arg(long)]
        oldest_first: bool,
    },

    /// Show the allowed categories and quantity labels
    Options,
}

/// Runs one command end to end.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load config ──────► defaults < config.toml < GROCER_* < flags       │
/// │  2. Init tracing ─────► RUST_LOG, else [log] filter; writes to stderr   │
/// │  3. Open store ───────► loads both snapshots; corrupt data stops here   │
/// │  4. Execute command ──► output text to stdout                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> CliResult<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.store.data_dir = Some(dir);
    }

    init_tracing(&config.log.filter);
    info!(
        config = ?config.source,
        data_dir = %config.data_dir().display(),
        "Starting grocer"
    );

    if let Command::Options = cli.command {
        print!("{}", commands::item::list_options());
        return Ok(());
    }

    let store = Store::open(config.store_config()).await?;
    let output = execute(&store, cli.command, &config.display).await?;
    print!("{}", output);
    Ok(())
}

/// Dispatches a parsed command against an open store.
pub async fn execute(store: &Store, command: Command, display: &DisplayConfig) -> CliResult<String> {
    match command {
        Command::Items { names: false } => commands::item::list_items(store).await,
        Command::Items { names: true } => commands::item::list_names(store).await,
        Command::Add {
            name,
            category,
            quantity,
            price,
        } => {
            let draft = ItemDraft::new(name, category, quantity, price);
            commands::item::add_item(store, draft).await
        }
        Command::Search { name } => commands::item::search_item(store, &name).await,
        Command::Edit {
            name,
            new_name,
            category,
            quantity,
            price,
        } => {
            let changes = ItemChanges {
                name: new_name,
                category,
                quantity,
                price,
            };
            commands::item::edit_item(store, &name, changes).await
        }
        Command::Bill { customer, items } => {
            commands::bill::generate_bill(store, &customer, &items, display).await
        }
        Command::Bills { oldest_first } => commands::bill::list_bills(store, oldest_first).await,
        Command::Options => Ok(commands::item::list_options()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocer_store=trace` - Show trace for the store only
/// - Default: `[log] filter`, else INFO with DEBUG for grocer crates
fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
