//! `partstock import` command - Bulk create parts from a CSV file
//!
//! The input is plain comma-delimited CSV with a header row:
//! `name,code,manufacturer,vehicle,stock,price,category`. Ids and
//! registration dates are assigned by the store, exactly as with
//! `part new`.

use console::style;
use csv::ReaderBuilder;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::core::project::Project;
use crate::core::store::PartStore;
use crate::entities::part::PartDraft;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file to import
    pub file: PathBuf,

    /// Validate the file without creating records
    #[arg(long)]
    pub dry_run: bool,

    /// Continue importing after errors (default: stop on first error)
    #[arg(long)]
    pub skip_errors: bool,
}

#[derive(Default)]
struct ImportStats {
    rows_processed: usize,
    parts_created: usize,
    errors: usize,
}

#[derive(serde::Deserialize)]
struct ImportRow {
    name: String,
    code: String,
    manufacturer: String,
    vehicle: String,
    stock: u32,
    price: rust_decimal::Decimal,
    category: String,
}

pub fn run(args: ImportArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(miette::miette!("File not found: {}", args.file.display()));
    }

    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    println!(
        "{} Importing parts from {}{}",
        style("→").blue(),
        style(args.file.display()).yellow(),
        if args.dry_run {
            style(" (dry run)").dim().to_string()
        } else {
            String::new()
        }
    );
    println!();

    let file = File::open(&args.file).into_diagnostic()?;
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut stats = ImportStats::default();

    for (row_idx, record) in reader.deserialize::<ImportRow>().enumerate() {
        stats.rows_processed += 1;
        let line = row_idx + 2; // header is line 1

        let row = match record {
            Ok(row) => row,
            Err(e) => {
                stats.errors += 1;
                if args.skip_errors {
                    println!("{} line {}: {}", style("✗").red(), line, e);
                    continue;
                }
                return Err(miette::miette!("line {}: {}", line, e));
            }
        };

        if args.dry_run {
            println!(
                "{} line {}: {} ({})",
                style("·").dim(),
                line,
                row.name,
                row.code
            );
            continue;
        }

        let part = store
            .insert(PartDraft {
                name: row.name,
                code: row.code,
                manufacturer: row.manufacturer,
                compatible_vehicle: row.vehicle,
                stock_quantity: row.stock,
                unit_price: row.price,
                category: row.category,
            })
            .map_err(|e| miette::miette!("line {}: {}", line, e))?;

        stats.parts_created += 1;
        println!(
            "{} {} {}",
            style("✓").green(),
            style(part.id.to_string()).cyan(),
            part.name
        );
    }

    println!();
    println!(
        "{} row(s) processed, {} created, {} error(s).",
        stats.rows_processed,
        style(stats.parts_created).green(),
        if stats.errors > 0 {
            style(stats.errors).red()
        } else {
            style(stats.errors).dim()
        }
    );

    Ok(())
}
