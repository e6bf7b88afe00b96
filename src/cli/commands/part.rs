//! `partstock part` command - Part management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;

use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::PartId;
use crate::core::project::Project;
use crate::core::store::PartStore;
use crate::core::Config;
use crate::entities::part::{Part, PartDraft};
use crate::export::FilterCriteria;

#[derive(Subcommand, Debug)]
pub enum PartCommands {
    /// Register a new part
    New(NewArgs),

    /// List parts with filtering
    List(ListArgs),

    /// Show a part's details
    Show(ShowArgs),

    /// Update a part's mutable fields
    Update(UpdateArgs),

    /// Delete a part
    Delete(DeleteArgs),

    /// Open a part's record file in your editor
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Part name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Part code
    #[arg(long, short = 'c')]
    pub code: String,

    /// Manufacturer
    #[arg(long, short = 'm')]
    pub manufacturer: String,

    /// Compatible vehicle
    #[arg(long)]
    pub vehicle: String,

    /// Stock quantity
    #[arg(long, short = 's', default_value_t = 0)]
    pub stock: u32,

    /// Unit price (e.g. 25.90)
    #[arg(long, short = 'p')]
    pub price: Decimal,

    /// Category (e.g. Motor, Freio)
    #[arg(long)]
    pub category: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by manufacturer (case-insensitive substring)
    #[arg(long, short = 'm')]
    pub manufacturer: Option<String>,

    /// Filter by category (case-insensitive substring)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by compatible vehicle (case-insensitive substring)
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Minimum unit price (inclusive)
    #[arg(long)]
    pub price_min: Option<Decimal>,

    /// Maximum unit price (inclusive)
    #[arg(long)]
    pub price_max: Option<Decimal>,

    /// Filter by exact part code
    #[arg(long)]
    pub code: Option<String>,

    /// Search in name and code
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by field
    #[arg(long, default_value = "id")]
    pub sort: ListColumn,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Sortable list columns
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListColumn {
    Id,
    Name,
    Code,
    Manufacturer,
    Vehicle,
    Stock,
    Price,
    Category,
    Registered,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Part ID (PART-...)
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Part ID (PART-...)
    pub id: String,

    /// New part name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New part code
    #[arg(long, short = 'c')]
    pub code: Option<String>,

    /// New manufacturer
    #[arg(long, short = 'm')]
    pub manufacturer: Option<String>,

    /// New compatible vehicle
    #[arg(long)]
    pub vehicle: Option<String>,

    /// New stock quantity
    #[arg(long, short = 's')]
    pub stock: Option<u32>,

    /// New unit price
    #[arg(long, short = 'p')]
    pub price: Option<Decimal>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Part ID (PART-...)
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Part ID (PART-...)
    pub id: String,
}

/// Run a part subcommand
pub fn run(cmd: PartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartCommands::New(args) => run_new(args, global),
        PartCommands::List(args) => run_list(args, global),
        PartCommands::Show(args) => run_show(args, global),
        PartCommands::Update(args) => run_update(args, global),
        PartCommands::Delete(args) => run_delete(args, global),
        PartCommands::Edit(args) => run_edit(args),
    }
}

fn parse_id(s: &str) -> Result<PartId> {
    PartId::parse(s).map_err(|e| miette::miette!("{}", e))
}

/// Resolve `auto` to the configured default format, if one is set
fn configured_format() -> Option<OutputFormat> {
    Config::load()
        .default_format
        .as_deref()
        .and_then(|s| OutputFormat::from_str(s, true).ok())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let part = store
        .insert(PartDraft {
            name: args.name,
            code: args.code,
            manufacturer: args.manufacturer,
            compatible_vehicle: args.vehicle,
            stock_quantity: args.stock,
            unit_price: args.price,
            category: args.category,
        })
        .map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Created part {}",
            style("✓").green(),
            style(part.id.to_string()).cyan()
        );
        println!(
            "   {} | {} | {}",
            style(&part.name).white(),
            style(&part.code).yellow(),
            style(&part.manufacturer).dim()
        );
        println!(
            "   {}",
            style(store.file_path(part.id).display()).dim()
        );
    } else {
        println!("{}", part.id);
    }

    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let parts = store.fetch_all().map_err(|e| miette::miette!("{}", e))?;

    // Filter flags share the export pipeline's criteria semantics
    let criteria = FilterCriteria {
        manufacturer: args.manufacturer.clone(),
        category: args.category.clone(),
        vehicle: args.vehicle.clone(),
        price_min: args.price_min,
        price_max: args.price_max,
        code: args.code.clone(),
    };

    let mut parts: Vec<Part> = parts
        .into_iter()
        .filter(|p| criteria.matches(p))
        .filter(|p| {
            args.search.as_ref().is_none_or(|search| {
                let needle = search.to_lowercase();
                p.name.to_lowercase().contains(&needle)
                    || p.code.to_lowercase().contains(&needle)
            })
        })
        .collect();

    match args.sort {
        ListColumn::Id => parts.sort_by_key(|p| p.id),
        ListColumn::Name => parts.sort_by(|a, b| a.name.cmp(&b.name)),
        ListColumn::Code => parts.sort_by(|a, b| a.code.cmp(&b.code)),
        ListColumn::Manufacturer => parts.sort_by(|a, b| a.manufacturer.cmp(&b.manufacturer)),
        ListColumn::Vehicle => {
            parts.sort_by(|a, b| a.compatible_vehicle.cmp(&b.compatible_vehicle))
        }
        ListColumn::Stock => parts.sort_by_key(|p| p.stock_quantity),
        ListColumn::Price => parts.sort_by_key(|p| p.unit_price),
        ListColumn::Category => parts.sort_by(|a, b| a.category.cmp(&b.category)),
        ListColumn::Registered => parts.sort_by_key(|p| p.registration_date),
    }

    if args.reverse {
        parts.reverse();
    }

    if let Some(limit) = args.limit {
        parts.truncate(limit);
    }

    if args.count {
        println!("{}", parts.len());
        return Ok(());
    }

    if parts.is_empty() {
        println!("No parts found.");
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => configured_format().unwrap_or(OutputFormat::Tsv),
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&parts).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&parts).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("id,name,code,manufacturer,vehicle,stock,price,category,registered");
            for p in &parts {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    p.id,
                    escape_csv(&p.name),
                    escape_csv(&p.code),
                    escape_csv(&p.manufacturer),
                    escape_csv(&p.compatible_vehicle),
                    p.stock_quantity,
                    p.unit_price,
                    escape_csv(&p.category),
                    p.registration_date.format("%Y-%m-%d")
                );
            }
        }
        OutputFormat::Id => {
            for p in &parts {
                println!("{}", p.id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{} {} {} {} {} {} {} {}",
                format!("{:<17}", style("ID").bold()),
                format!("{:<24}", style("NAME").bold()),
                format!("{:<8}", style("CODE").bold()),
                format!("{:<12}", style("MAKER").bold()),
                format!("{:<16}", style("VEHICLE").bold()),
                format!("{:>6}", style("STOCK").bold()),
                format!("{:>10}", style("PRICE").bold()),
                format!("{:<12}", style("CATEGORY").bold()),
            );
            println!("{}", "-".repeat(110));

            for p in &parts {
                println!(
                    "{:<17} {:<24} {:<8} {:<12} {:<16} {:>6} {:>10} {:<12}",
                    format_short_id(&p.id),
                    truncate_str(&p.name, 22),
                    truncate_str(&p.code, 8),
                    truncate_str(&p.manufacturer, 10),
                    truncate_str(&p.compatible_vehicle, 14),
                    p.stock_quantity,
                    p.unit_price.to_string(),
                    truncate_str(&p.category, 12),
                );
            }

            println!();
            println!("{} part(s) found.", style(parts.len()).cyan());
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let id = parse_id(&args.id)?;
    let part = store.get(id).map_err(|e| miette::miette!("{}", e))?;

    let format = match global.format {
        OutputFormat::Auto => configured_format().unwrap_or(OutputFormat::Auto),
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&part).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&part).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => println!("{}", part.id),
        _ => {
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: {}", style("ID").bold(), style(part.id.to_string()).cyan());
            println!("{}: {}", style("Name").bold(), style(&part.name).yellow());
            println!("{}: {}", style("Code").bold(), part.code);
            println!("{}: {}", style("Manufacturer").bold(), part.manufacturer);
            println!("{}: {}", style("Vehicle").bold(), part.compatible_vehicle);
            println!("{}: {}", style("Stock").bold(), part.stock_quantity);
            println!("{}: {}", style("Unit price").bold(), part.unit_price);
            println!("{}: {}", style("Category").bold(), part.category);
            println!(
                "{}: {}",
                style("Registered").bold(),
                part.registration_date.format("%Y-%m-%d")
            );
            println!("{}", style("─".repeat(60)).dim());
        }
    }

    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let id = parse_id(&args.id)?;
    let existing = store.get(id).map_err(|e| miette::miette!("{}", e))?;

    let draft = PartDraft {
        name: args.name.unwrap_or(existing.name),
        code: args.code.unwrap_or(existing.code),
        manufacturer: args.manufacturer.unwrap_or(existing.manufacturer),
        compatible_vehicle: args.vehicle.unwrap_or(existing.compatible_vehicle),
        stock_quantity: args.stock.unwrap_or(existing.stock_quantity),
        unit_price: args.price.unwrap_or(existing.unit_price),
        category: args.category.unwrap_or(existing.category),
    };

    let updated = store.update(id, draft).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Updated part {}",
            style("✓").green(),
            style(updated.id.to_string()).cyan()
        );
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let id = parse_id(&args.id)?;
    let part = store.get(id).map_err(|e| miette::miette!("{}", e))?;

    if !args.yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete part '{}' ({})?", part.name, part.code))
            .default(false)
            .interact()
            .into_diagnostic()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.delete(id).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Deleted {}",
            style("✓").green(),
            style(id.to_string()).cyan()
        );
    }

    Ok(())
}

fn run_edit(args: EditArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);
    let config = Config::load();

    let id = parse_id(&args.id)?;
    // Validate the record exists before handing it to an editor
    store.get(id).map_err(|e| miette::miette!("{}", e))?;

    let file_path = store.file_path(id);
    println!("Opening in {}...", style(config.editor()).yellow());
    config.run_editor(&file_path).into_diagnostic()?;

    Ok(())
}
