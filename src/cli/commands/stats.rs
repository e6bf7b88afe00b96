//! `partstock stats` command - Inventory statistics

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::store::PartStore;

#[derive(clap::Args, Debug)]
pub struct StatsArgs {}

pub fn run(_args: StatsArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let store = PartStore::open(&project);

    let counts = store
        .count_by_category()
        .map_err(|e| miette::miette!("{}", e))?;

    if counts.is_empty() {
        println!("No parts found.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&counts).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            println!("category,count");
            for (category, count) in &counts {
                println!("{},{}", crate::cli::helpers::escape_csv(category), count);
            }
        }
        _ => {
            let mut table = Builder::default();
            table.push_record(["Category", "Parts"]);
            for (category, count) in &counts {
                table.push_record([category.clone(), count.to_string()]);
            }
            println!("{}", table.build().with(Style::sharp()));

            let total: usize = counts.values().sum();
            println!(
                "\n{} part(s) across {} categories.",
                style(total).cyan(),
                style(counts.len()).cyan()
            );
        }
    }

    Ok(())
}
