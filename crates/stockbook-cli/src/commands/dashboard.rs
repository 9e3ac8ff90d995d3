//! Dashboard command
//!
//! Usage: stockbook dashboard [--data <PATH>]

use clap::Args;
use std::path::PathBuf;

use stockbook_store::WorkbookStore;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Path to the workbook file
    #[arg(long, default_value = "data/inventory.xlsx")]
    pub data: PathBuf,
}

/// Execute dashboard command
pub fn execute(args: DashboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = WorkbookStore::new(args.data);
    let summary = store.dashboard()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
