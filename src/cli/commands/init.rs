//! `partstock init` command - Initialize a new project

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::project::{Project, ProjectError};
use crate::core::store::PartStore;
use crate::entities::part::PartDraft;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Force initialization even if .partstock/ already exists
    #[arg(long)]
    pub force: bool,

    /// Load the sample parts catalog into an empty inventory
    #[arg(long)]
    pub seed: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    let project = if args.force {
        Project::init_force(&path)
    } else {
        Project::init(&path)
    };

    let project = match project {
        Ok(project) => project,
        Err(ProjectError::AlreadyExists(existing)) => {
            println!(
                "{} partstock project already exists at {}",
                style("!").yellow(),
                style(existing.display()).cyan()
            );
            println!("Use {} to reinitialize.", style("--force").yellow());
            return Ok(());
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    println!(
        "{} Initialized partstock project at {}",
        style("✓").green(),
        style(project.root().display()).cyan()
    );

    if args.seed {
        seed(&project)?;
    }

    println!();
    println!("Next steps:");
    println!(
        "  {} Register your first part",
        style("partstock part new").yellow()
    );
    println!("  {} List the inventory", style("partstock part list").yellow());
    println!(
        "  {} Write a filtered CSV extract",
        style("partstock export").yellow()
    );

    Ok(())
}

/// Insert the sample catalog, but only into an empty store
fn seed(project: &Project) -> Result<()> {
    let store = PartStore::open(project);
    let existing = store.fetch_all().map_err(|e| miette::miette!("{}", e))?;

    if !existing.is_empty() {
        println!(
            "{} Inventory is not empty; skipping seed catalog",
            style("!").yellow()
        );
        return Ok(());
    }

    let catalog = PartDraft::seed_catalog();
    let count = catalog.len();
    for draft in catalog {
        store.insert(draft).map_err(|e| miette::miette!("{}", e))?;
    }

    println!(
        "{} Seeded {} sample parts",
        style("✓").green(),
        style(count).cyan()
    );
    Ok(())
}
