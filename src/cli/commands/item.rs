//! `ait item` command - Inventory item management

use clap::{Subcommand, ValueEnum};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{miette, IntoDiagnostic, Result};

use crate::cli::helpers::{authenticate, blank_to_none, open_store};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{AuthOpts, GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::InventoryItem;

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List inventory items
    List(ListArgs),

    /// Add a new inventory item
    Add(AddArgs),

    /// Show an item's details
    Show(ShowArgs),

    /// Edit fields of an existing item
    Edit(EditArgs),

    /// Delete an item
    Delete(DeleteArgs),

    /// Search items by name or location
    Search(SearchArgs),
}

/// Columns to display in list output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListColumn {
    Name,
    Qty,
    Location,
    Note,
}

impl ListColumn {
    pub fn key(&self) -> &'static str {
        match self {
            ListColumn::Name => "name",
            ListColumn::Qty => "qty",
            ListColumn::Location => "location",
            ListColumn::Note => "note",
        }
    }
}

impl std::fmt::Display for ListColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Column definitions for item list output
const ITEM_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "NAME", 26),
    ColumnDef::new("qty", "QTY", 5),
    ColumnDef::new("location", "LOCATION", 18),
    ColumnDef::new("note", "NOTE", 24),
];

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Columns to display (can specify multiple)
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        ListColumn::Name,
        ListColumn::Qty,
        ListColumn::Location
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

    /// Item name (prompted for when omitted)
    pub name: Option<String>,

    /// Stock on hand (default: 0)
    #[arg(long, short = 'Q')]
    pub quantity: Option<i64>,

    /// Storage location
    #[arg(long)]
    pub location: Option<String>,

    /// Note
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Item id
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    #[command(flatten)]
    pub auth: AuthOpts,

    /// Item id
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New stock count
    #[arg(long, short = 'Q')]
    pub quantity: Option<i64>,

    /// New storage location (pass an empty string to clear)
    #[arg(long)]
    pub location: Option<String>,

    /// New note (pass an empty string to clear)
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub auth: AuthOpts,

    /// Item id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Substring to match against name and location
    pub query: String,

    /// Columns to display (can specify multiple)
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        ListColumn::Name,
        ListColumn::Qty,
        ListColumn::Location
    ])]
    pub columns: Vec<ListColumn>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Run an item subcommand
pub fn run(cmd: ItemCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ItemCommands::List(args) => run_list(args, global),
        ItemCommands::Add(args) => run_add(args, global),
        ItemCommands::Show(args) => run_show(args, global),
        ItemCommands::Edit(args) => run_edit(args, global),
        ItemCommands::Delete(args) => run_delete(args, global),
        ItemCommands::Search(args) => run_search(args, global),
    }
}

fn item_row(item: &InventoryItem) -> TableRow {
    TableRow::new(item.id)
        .cell("name", CellValue::Text(item.name.clone()))
        .cell("qty", CellValue::Number(item.quantity))
        .cell("location", CellValue::OptText(item.location.clone()))
        .cell("note", CellValue::OptText(item.note.clone()))
}

fn output_items(
    items: Vec<InventoryItem>,
    format: OutputFormat,
    columns: &[ListColumn],
    count: bool,
) -> Result<()> {
    // Count only
    if count {
        println!("{}", items.len());
        return Ok(());
    }

    // No results
    if items.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    let format = match format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&items).into_diagnostic()?;
            println!("{}", json);
        }
        _ => {
            let keys: Vec<&str> = columns.iter().map(|c| c.key()).collect();
            let rows = items.iter().map(item_row);
            TableFormatter::new(ITEM_COLUMNS, "item").output(rows, format, &keys);
        }
    }

    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let mut items = store.list_items().map_err(|e| miette!("{}", e))?;
    if let Some(limit) = args.limit {
        items.truncate(limit);
    }

    output_items(items, global.format, &args.columns, args.count)
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let session = authenticate(&store, &args.auth, &config)?;

    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Item name")
            .interact_text()
            .into_diagnostic()?,
    };

    let mut item = InventoryItem::new(name);
    if let Some(quantity) = args.quantity {
        item.quantity = quantity;
    }
    item.location = blank_to_none(args.location);
    item.note = blank_to_none(args.note);

    let item = session.add_item(&item).map_err(|e| miette!("{}", e))?;

    match global.format {
        OutputFormat::Id => {
            println!("{}", item.id);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&item).into_diagnostic()?;
            println!("{}", json);
        }
        _ => {
            if !global.quiet {
                println!(
                    "{} Added item {}",
                    style("✓").green(),
                    style(item.id).cyan()
                );
                println!(
                    "   {} x{}",
                    style(&item.name).white(),
                    style(item.quantity).yellow()
                );
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let item = store
        .get_item(args.id)
        .map_err(|e| miette!("{}", e))?
        .ok_or_else(|| miette!("No item found with id {}", args.id))?;

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&item).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => {
            println!("{}", item.id);
        }
        _ => {
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: {}", style("ID").bold(), style(item.id).cyan());
            println!("{}: {}", style("Name").bold(), item.name);
            println!("{}: {}", style("Quantity").bold(), item.quantity);
            if let Some(ref location) = item.location {
                println!("{}: {}", style("Location").bold(), location);
            }
            if let Some(ref note) = item.note {
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

    let mut item = store
        .get_item(args.id)
        .map_err(|e| miette!("{}", e))?
        .ok_or_else(|| miette!("No item found with id {}", args.id))?;

    let mut changed = false;
    if let Some(name) = args.name {
        item.name = name;
        changed = true;
    }
    if let Some(quantity) = args.quantity {
        item.quantity = quantity;
        changed = true;
    }
    if let Some(location) = args.location {
        item.location = blank_to_none(Some(location));
        changed = true;
    }
    if let Some(note) = args.note {
        item.note = blank_to_none(Some(note));
        changed = true;
    }

    if !changed {
        println!("Nothing to change.");
        return Ok(());
    }

    let session = authenticate(&store, &args.auth, &config)?;
    session.update_item(&item).map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Updated item {}",
            style("✓").green(),
            style(item.id).cyan()
        );
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let item = store
        .get_item(args.id)
        .map_err(|e| miette!("{}", e))?
        .ok_or_else(|| miette!("No item found with id {}", args.id))?;

    if !args.yes {
        print!("Delete item {} ({})? [y/N] ", item.id, item.name);
        std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).into_diagnostic()?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let session = authenticate(&store, &args.auth, &config)?;
    session.delete_item(args.id).map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Deleted item {}",
            style("✓").green(),
            style(args.id).cyan()
        );
    }

    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    let items = store
        .search_items(&args.query)
        .map_err(|e| miette!("{}", e))?;

    output_items(items, global.format, &args.columns, args.count)
}
