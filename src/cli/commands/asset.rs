//! `ait asset` command - Asset record management

use clap::{Subcommand, ValueEnum};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{miette, IntoDiagnostic, Result};

use crate::cli::helpers::{authenticate, blank_to_none, open_store, parse_date, parse_price};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{AuthOpts, GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::Asset;

#[derive(Subcommand, Debug)]
pub enum AssetCommands {
    /// List assets
    List(ListArgs),

    /// Add a new asset
    Add(AddArgs),

    /// Show an asset's details
    Show(ShowArgs),

    /// Edit fields of an existing asset
    Edit(EditArgs),

    /// Delete an asset
    Delete(DeleteArgs),

    /// Search assets by name or asset code
    Search(SearchArgs),
}

/// Columns to display in list output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListColumn {
    Code,
    Sub,
    Year,
    Name,
    Details,
    Serial,
    Category,
    Qty,
    Acquired,
    Unit,
    Price,
    Note,
}

impl ListColumn {
    pub fn key(&self) -> &'static str {
        match self {
            ListColumn::Code => "code",
            ListColumn::Sub => "sub",
            ListColumn::Year => "year",
            ListColumn::Name => "name",
            ListColumn::Details => "details",
            ListColumn::Serial => "serial",
            ListColumn::Category => "category",
            ListColumn::Qty => "qty",
            ListColumn::Acquired => "acquired",
            ListColumn::Unit => "unit",
            ListColumn::Price => "price",
            ListColumn::Note => "note",
        }
    }
}

impl std::fmt::Display for ListColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Column definitions for asset list output
const ASSET_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("code", "CODE", 14),
    ColumnDef::new("sub", "SUB", 8),
    ColumnDef::new("year", "YEAR", 8),
    ColumnDef::new("name", "NAME", 26),
    ColumnDef::new("details", "DETAILS", 30),
    ColumnDef::new("serial", "SERIAL", 16),
    ColumnDef::new("category", "CATEGORY", 14),
    ColumnDef::new("qty", "QTY", 5),
    ColumnDef::new("acquired", "ACQUIRED", 12),
    ColumnDef::new("unit", "UNIT", 8),
    ColumnDef::new("price", "PRICE", 10),
    ColumnDef::new("note", "NOTE", 24),
];

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Columns to display (can specify multiple)
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        ListColumn::Code,
        ListColumn::Name,
        ListColumn::Category,
        ListColumn::Qty,
        ListColumn::Acquired,
        ListColumn::Price
    ])]
    pub columns: Vec<ListColumn>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub auth: AuthOpts,

    /// Asset name (prompted for when omitted)
    pub name: Option<String>,

    /// Asset code (prompted for when omitted)
    #[arg(long, short = 'c')]
    pub code: Option<String>,

    /// Sub code
    #[arg(long)]
    pub sub_code: Option<String>,

    /// Budget year the asset was acquired under
    #[arg(long)]
    pub budget_year: Option<String>,

    /// Free-form details
    #[arg(long)]
    pub details: Option<String>,

    /// Serial number
    #[arg(long)]
    pub serial: Option<String>,

    /// Category
    #[arg(long)]
    pub category: Option<String>,

    /// Quantity (default: 1)
    #[arg(long, short = 'Q')]
    pub quantity: Option<i64>,

    /// Acquisition date (YYYY-MM-DD)
    #[arg(long)]
    pub acquired: Option<String>,

    /// Requisition unit
    #[arg(long)]
    pub unit: Option<String>,

    /// Purchase price
    #[arg(long)]
    pub price: Option<f64>,

    /// Note
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Asset id
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    #[command(flatten)]
    pub auth: AuthOpts,

    /// Asset id
    pub id: i64,

    /// New asset code
    #[arg(long, short = 'c')]
    pub code: Option<String>,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New sub code (pass an empty string to clear)
    #[arg(long)]
    pub sub_code: Option<String>,

    /// New budget year (pass an empty string to clear)
    #[arg(long)]
    pub budget_year: Option<String>,

    /// New details (pass an empty string to clear)
    #[arg(long)]
    pub details: Option<String>,

    /// New serial number (pass an empty string to clear)
    #[arg(long)]
    pub serial: Option<String>,

    /// New category (pass an empty string to clear)
    #[arg(long)]
    pub category: Option<String>,

    /// New quantity
    #[arg(long, short = 'Q')]
    pub quantity: Option<i64>,

    /// New acquisition date, YYYY-MM-DD (pass an empty string to clear)
    #[arg(long)]
    pub acquired: Option<String>,

    /// New requisition unit (pass an empty string to clear)
    #[arg(long)]
    pub unit: Option<String>,

    /// New price (pass an empty string to clear)
    #[arg(long)]
    pub price: Option<String>,

    /// New note (pass an empty string to clear)
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub auth: AuthOpts,

    /// Asset id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Substring to match against name and asset code
    pub query: String,

    /// Columns to display (can specify multiple)
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        ListColumn::Code,
        ListColumn::Name,
        ListColumn::Category,
        ListColumn::Qty,
        ListColumn::Acquired,
        ListColumn::Price
    ])]
    pub columns: Vec<ListColumn>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Run an asset subcommand
pub fn run(cmd: AssetCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        AssetCommands::List(args) => run_list(args, global),
        AssetCommands::Add(args) => run_add(args, global),
        AssetCommands::Show(args) => run_show(args, global),
        AssetCommands::Edit(args) => run_edit(args, global),
        AssetCommands::Delete(args) => run_delete(args, global),
        AssetCommands::Search(args) => run_search(args, global),
    }
}

fn asset_row(asset: &Asset) -> TableRow {
    TableRow::new(asset.id)
        .cell("code", CellValue::Text(asset.asset_code.clone()))
        .cell("sub", CellValue::OptText(asset.sub_code.clone()))
        .cell("year", CellValue::OptText(asset.budget_year.clone()))
        .cell("name", CellValue::Text(asset.name.clone()))
        .cell("details", CellValue::OptText(asset.details.clone()))
        .cell("serial", CellValue::OptText(asset.serial_number.clone()))
        .cell("category", CellValue::OptText(asset.category.clone()))
        .cell("qty", CellValue::Number(asset.quantity))
        .cell("acquired", CellValue::Date(asset.acquisition_date))
        .cell("unit", CellValue::OptText(asset.unit.clone()))
        .cell("price", CellValue::Money(asset.price))
        .cell("note", CellValue::OptText(asset.note.clone()))
}

fn output_assets(
    assets: Vec<Asset>,
    format: OutputFormat,
    columns: &[ListColumn],
    count: bool,
) -> Result<()> {
    // Count only
    if count {
        println!("{}", assets.len());
        return Ok(());
    }

    // No results
    if assets.is_empty() {
        println!("No assets found.");
        return Ok(());
    }

    let format = match format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&assets).into_diagnostic()?;
            println!("{}", json);
        }
        _ => {
            let keys: Vec<&str> = columns.iter().map(|c| c.key()).collect();
            let rows = assets.iter().map(asset_row);
            TableFormatter::new(ASSET_COLUMNS, "asset").output(rows, format, &keys);
        }
    }

    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let mut assets = store.list_assets().map_err(|e| miette!("{}", e))?;
    if let Some(limit) = args.limit {
        assets.truncate(limit);
    }

    output_assets(assets, global.format, &args.columns, args.count)
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let session = authenticate(&store, &args.auth, &config)?;

    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Asset name")
            .interact_text()
            .into_diagnostic()?,
    };
    let code = match args.code {
        Some(code) => code,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Asset code")
            .interact_text()
            .into_diagnostic()?,
    };

    let mut asset = Asset::new(code, name);
    asset.sub_code = blank_to_none(args.sub_code);
    asset.budget_year = blank_to_none(args.budget_year);
    asset.details = blank_to_none(args.details);
    asset.serial_number = blank_to_none(args.serial);
    asset.category = blank_to_none(args.category);
    if let Some(quantity) = args.quantity {
        asset.quantity = quantity;
    }
    if let Some(ref date) = args.acquired {
        asset.acquisition_date = Some(parse_date(date)?);
    }
    asset.unit = blank_to_none(args.unit);
    asset.price = args.price;
    asset.note = blank_to_none(args.note);

    let asset = session.add_asset(&asset).map_err(|e| miette!("{}", e))?;

    match global.format {
        OutputFormat::Id => {
            println!("{}", asset.id);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&asset).into_diagnostic()?;
            println!("{}", json);
        }
        _ => {
            if !global.quiet {
                println!(
                    "{} Added asset {}",
                    style("✓").green(),
                    style(asset.id).cyan()
                );
                println!(
                    "   {} | {}",
                    style(&asset.asset_code).yellow(),
                    style(&asset.name).white()
                );
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let asset = store
        .get_asset(args.id)
        .map_err(|e| miette!("{}", e))?
        .ok_or_else(|| miette!("No asset found with id {}", args.id))?;

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&asset).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => {
            println!("{}", asset.id);
        }
        _ => {
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: {}", style("ID").bold(), style(asset.id).cyan());
            println!(
                "{}: {}",
                style("Code").bold(),
                style(&asset.asset_code).yellow()
            );
            if let Some(ref sub) = asset.sub_code {
                println!("{}: {}", style("Sub code").bold(), sub);
            }
            if let Some(ref year) = asset.budget_year {
                println!("{}: {}", style("Budget year").bold(), year);
            }
            println!("{}: {}", style("Name").bold(), asset.name);
            if let Some(ref details) = asset.details {
                println!("{}: {}", style("Details").bold(), details);
            }
            if let Some(ref serial) = asset.serial_number {
                println!("{}: {}", style("Serial number").bold(), serial);
            }
            if let Some(ref category) = asset.category {
                println!("{}: {}", style("Category").bold(), category);
            }
            println!("{}: {}", style("Quantity").bold(), asset.quantity);
            if let Some(date) = asset.acquisition_date {
                println!("{}: {}", style("Acquired").bold(), date);
            }
            if let Some(ref unit) = asset.unit {
                println!("{}: {}", style("Unit").bold(), unit);
            }
            if let Some(price) = asset.price {
                println!("{}: {:.2}", style("Price").bold(), price);
            }
            if let Some(ref note) = asset.note {
                println!("{}: {}", style("Note").bold(), note);
            }
            println!("{}", style("─".repeat(60)).dim());
        }
    }

    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let mut asset = store
        .get_asset(args.id)
        .map_err(|e| miette!("{}", e))?
        .ok_or_else(|| miette!("No asset found with id {}", args.id))?;

    let mut changed = false;
    if let Some(code) = args.code {
        asset.asset_code = code;
        changed = true;
    }
    if let Some(name) = args.name {
        asset.name = name;
        changed = true;
    }
    if let Some(sub) = args.sub_code {
        asset.sub_code = blank_to_none(Some(sub));
        changed = true;
    }
    if let Some(year) = args.budget_year {
        asset.budget_year = blank_to_none(Some(year));
        changed = true;
    }
    if let Some(details) = args.details {
        asset.details = blank_to_none(Some(details));
        changed = true;
    }
    if let Some(serial) = args.serial {
        asset.serial_number = blank_to_none(Some(serial));
        changed = true;
    }
    if let Some(category) = args.category {
        asset.category = blank_to_none(Some(category));
        changed = true;
    }
    if let Some(quantity) = args.quantity {
        asset.quantity = quantity;
        changed = true;
    }
    if let Some(date) = args.acquired {
        asset.acquisition_date = if date.trim().is_empty() {
            None
        } else {
            Some(parse_date(&date)?)
        };
        changed = true;
    }
    if let Some(unit) = args.unit {
        asset.unit = blank_to_none(Some(unit));
        changed = true;
    }
    if let Some(price) = args.price {
        asset.price = if price.trim().is_empty() {
            None
        } else {
            Some(parse_price(&price)?)
        };
        changed = true;
    }
    if let Some(note) = args.note {
        asset.note = blank_to_none(Some(note));
        changed = true;
    }

    if !changed {
        println!("Nothing to change.");
        return Ok(());
    }

    let session = authenticate(&store, &args.auth, &config)?;
    session.update_asset(&asset).map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Updated asset {}",
            style("✓").green(),
            style(asset.id).cyan()
        );
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let asset = store
        .get_asset(args.id)
        .map_err(|e| miette!("{}", e))?
        .ok_or_else(|| miette!("No asset found with id {}", args.id))?;

    if !args.yes {
        print!(
            "Delete asset {} ({})? [y/N] ",
            asset.id, asset.asset_code
        );
        std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).into_diagnostic()?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let session = authenticate(&store, &args.auth, &config)?;
    session
        .delete_asset(args.id)
        .map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Deleted asset {}",
            style("✓").green(),
            style(args.id).cyan()
        );
    }

    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let assets = store
        .search_assets(&args.query)
        .map_err(|e| miette!("{}", e))?;

    output_assets(assets, global.format, &args.columns, args.count)
}
