//! Seed command
//!
//! Usage: stockbook seed [--data <PATH>]
//!
//! Unconditionally overwrites the workbook with the fixed sample rows,
//! regardless of existing content.

use clap::Args;
use std::path::PathBuf;

use stockbook_store::WorkbookStore;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path to the workbook file
    #[arg(long, default_value = "data/inventory.xlsx")]
    pub data: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = WorkbookStore::new(args.data);
    store.seed_sample_data()?;
    println!("Sample data written to {}", store.path().display());
    Ok(())
}
