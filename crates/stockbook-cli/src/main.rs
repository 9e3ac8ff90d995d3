//! Stockbook CLI
//!
//! Command-line interface for seeding and inspecting the inventory workbook

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "stockbook")]
#[command(about = "Stockbook - workbook-backed inventory tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Overwrite the workbook with sample data
    Seed(commands::seed::SeedArgs),
    /// Create the workbook with seed data if it does not exist
    Init(commands::init::InitArgs),
    /// Print the dashboard summary as JSON
    Dashboard(commands::dashboard::DashboardArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Init(args) => commands::init::execute(args),
        Commands::Dashboard(args) => commands::dashboard::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
