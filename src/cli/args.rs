//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    asset::AssetCommands,
    completions::CompletionsArgs,
    export::ExportArgs,
    init::InitArgs,
    item::ItemCommands,
    user::UserCommands,
};

#[derive(Parser)]
#[command(name = "ait")]
#[command(author, version, about = "Asset & Inventory Toolkit")]
#[command(long_about = "A command-line tool for tracking assets and inventory items in a local \
SQLite database, with spreadsheet, document, and PDF export.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Path to the database file (default: inventory.db)
    #[arg(long, global = true, env = "AIT_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Credentials for commands that modify the database. Prompted for
/// interactively when not supplied.
#[derive(clap::Args, Clone, Debug)]
pub struct AuthOpts {
    /// Username to authenticate as
    #[arg(long, short = 'u', env = "AIT_USERNAME")]
    pub username: Option<String>,

    /// Password (prefer the env var or the prompt over this flag)
    #[arg(long, env = "AIT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new inventory database
    Init(InitArgs),

    /// Asset management
    #[command(subcommand)]
    Asset(AssetCommands),

    /// Inventory item management
    #[command(subcommand)]
    Item(ItemCommands),

    /// Export all assets to a spreadsheet, document, or PDF file
    Export(ExportArgs),

    /// User account management
    #[command(subcommand)]
    User(UserCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for list, pretty for show)
    #[default]
    Auto,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
