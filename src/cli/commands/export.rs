//! `partstock export` command - Write a filtered CSV extract

use console::style;
use miette::Result;
use rust_decimal::Decimal;

use crate::cli::GlobalOpts;
use crate::core::project::Project;
use crate::core::store::PartStore;
use crate::export::{DirectorySink, Exporter, FilterCriteria};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Keep only parts whose manufacturer contains this (case-insensitive)
    #[arg(long, short = 'm')]
    pub manufacturer: Option<String>,

    /// Keep only parts whose category contains this (case-insensitive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Keep only parts whose compatible vehicle contains this (case-insensitive)
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Inclusive minimum unit price
    #[arg(long)]
    pub price_min: Option<Decimal>,

    /// Inclusive maximum unit price
    #[arg(long)]
    pub price_max: Option<Decimal>,

    /// Keep only the part with this exact code
    #[arg(long)]
    pub code: Option<String>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let criteria = FilterCriteria {
        manufacturer: args.manufacturer,
        category: args.category,
        vehicle: args.vehicle,
        price_min: args.price_min,
        price_max: args.price_max,
        code: args.code,
    };

    let parts = store.fetch_all().map_err(|e| miette::miette!("{}", e))?;

    let exporter = Exporter::new(DirectorySink::new(project.data_lake_dir()));
    let outcome = exporter
        .export(&parts, &criteria)
        .map_err(|e| miette::miette!("{}", e))?;

    if global.quiet {
        println!("{}", outcome.path.display());
    } else {
        println!(
            "{} Exported {} part(s) to {}",
            style("✓").green(),
            style(outcome.selected).cyan(),
            style(outcome.path.display()).cyan()
        );
        if global.verbose && criteria.is_empty() {
            println!("   (no filters supplied; full inventory exported)");
        }
    }

    Ok(())
}
