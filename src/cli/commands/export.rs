//! `ait export` command - Write the asset register to a file

use std::path::PathBuf;

use console::style;
use miette::{miette, Result};

use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::export::{export_to_path, ExportFormat};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output format: tabular-spreadsheet (xlsx, excel), tabular-document
    /// (docx, word), or flat-text-pdf (pdf)
    // a field named `format` would collide with the global --format arg id
    #[arg(value_name = "FORMAT")]
    pub target: String,

    /// Output file (default: assets.xlsx / assets.docx / assets.pdf)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Run the export command
pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let format: ExportFormat = args.target.parse().map_err(|e| miette!("{}", e))?;

    let assets = store.list_assets().map_err(|e| miette!("{}", e))?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format.default_filename()));

    export_to_path(&assets, format, &path).map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Exported {} asset(s) to {}",
            style("✓").green(),
            style(assets.len()).cyan(),
            style(path.display()).white()
        );
    }

    Ok(())
}
