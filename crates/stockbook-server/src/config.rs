//! Server configuration
//!
//! Environment-driven with defaults; the workbook path is configuration,
//! not global state.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind, e.g. `0.0.0.0:8001`
    pub bind_addr: String,

    /// Path of the backing workbook file
    pub data_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// - `STOCKBOOK_ADDR` (default `0.0.0.0:8001`)
    /// - `STOCKBOOK_DATA` (default `data/inventory.xlsx`)
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("STOCKBOOK_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".to_string()),
            data_path: env::var("STOCKBOOK_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/inventory.xlsx")),
        }
    }
}
