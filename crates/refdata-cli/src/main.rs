//! refdata CLI - generate and check reference data for resampling filters.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "refdata")]
#[command(author, version, about = "Reference data generator for resampling filters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate reference records for a set of scenarios
    Generate(commands::generate::GenerateArgs),

    /// Generate one reference record from command-line coefficients
    Run(commands::run::RunArgs),

    /// List built-in scenarios or print one as TOML
    Scenarios(commands::scenarios::ScenariosArgs),

    /// Compare a filter output against a reference record
    Compare(commands::compare::CompareArgs),

    /// Show a summary of a reference record
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Scenarios(args) => commands::scenarios::run(args),
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
