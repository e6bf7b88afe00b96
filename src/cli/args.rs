//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, export::ExportArgs, import::ImportArgs, init::InitArgs,
    part::PartCommands, stats::StatsArgs,
};

#[derive(Parser)]
#[command(name = "partstock")]
#[command(author, version, about = "Automotive parts inventory manager")]
#[command(
    long_about = "A Unix-style tool for tracking automotive replacement parts as plain text files and producing filtered CSV extracts for spreadsheet import."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new partstock project
    Init(InitArgs),

    /// Part management (create, list, update, delete)
    #[command(subcommand)]
    Part(PartCommands),

    /// Bulk import parts from a CSV file
    Import(ImportArgs),

    /// Inventory statistics (counts by category)
    Stats(StatsArgs),

    /// Export a filtered CSV extract to the content directory
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Just IDs, one per line
    Id,
}
