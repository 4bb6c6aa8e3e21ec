//! `ait init` command - Create a new inventory database

use std::path::PathBuf;

use console::style;
use miette::{miette, Result};

use crate::cli::GlobalOpts;
use crate::core::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::core::{Config, Store};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Database file to create (default: inventory.db)
    pub path: Option<PathBuf>,
}

/// Run the init command
pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let path = args
        .path
        .unwrap_or_else(|| config.database_path(global.db.as_deref()));

    if path.exists() {
        println!(
            "{} Database already exists at {}",
            style("!").yellow(),
            style(path.display()).white()
        );
        return Ok(());
    }

    Store::open(&path).map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Initialized inventory database at {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        println!(
            "{} Default credentials are {}/{}; change them with 'ait user passwd'",
            style("!").yellow(),
            DEFAULT_USERNAME,
            DEFAULT_PASSWORD
        );
        println!();
        println!("Next steps:");
        println!(
            "  {} to register an asset",
            style("ait asset add").yellow()
        );
        println!(
            "  {} to stock an inventory item",
            style("ait item add").yellow()
        );
        println!(
            "  {} to write the register to a file",
            style("ait export xlsx").yellow()
        );
    }

    Ok(())
}
