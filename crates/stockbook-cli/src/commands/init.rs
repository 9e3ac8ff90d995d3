//! Init command
//!
//! Usage: stockbook init [--data <PATH>]
//!
//! Idempotent: an existing workbook is left untouched.

use clap::Args;
use std::path::PathBuf;

use stockbook_store::WorkbookStore;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to the workbook file
    #[arg(long, default_value = "data/inventory.xlsx")]
    pub data: PathBuf,
}

/// Execute init command
pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = WorkbookStore::new(args.data);
    store.ensure_initialized()?;
    println!("Workbook ready at {}", store.path().display());
    Ok(())
}
