//! WorkbookStore - the persistence service over one workbook file
//!
//! The store owns nothing but the path; every operation opens, parses, and
//! (for mutations) rewrites the file. Construct one explicitly and hand it
//! to the API layer; there is no global instance.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use stockbook_core::dashboard::{compute_dashboard, DashboardSummary};
use stockbook_core::errors::Result;
use stockbook_core::model::{InventoryItem, NewItem};
use stockbook_core::rules::normalize_new_item;

use crate::errors::io_error;
use crate::seed::seed_workbook;
use crate::workbook::{read_workbook, write_workbook, WorkbookData};

/// Store for one workbook file
#[derive(Debug, Clone)]
pub struct WorkbookStore {
    path: PathBuf,
}

impl WorkbookStore {
    /// Create a store bound to the given workbook path
    ///
    /// The file is not touched here; call [`WorkbookStore::ensure_initialized`]
    /// once at startup to create it with seed data if absent.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing workbook file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the workbook with seed data if the file does not exist
    ///
    /// Idempotent: an existing file is left untouched.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "workbook already present");
            return Ok(());
        }
        info!(path = %self.path.display(), "creating workbook with seed data");
        self.write_seeded()
    }

    /// Unconditionally overwrite the workbook with the fixed seed rows
    ///
    /// Unlike [`WorkbookStore::ensure_initialized`] this always executes,
    /// discarding any existing content. Used for demo resets.
    pub fn seed_sample_data(&self) -> Result<()> {
        info!(path = %self.path.display(), "reseeding workbook");
        self.write_seeded()
    }

    fn write_seeded(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| io_error(&self.path, err))?;
            }
        }
        write_workbook(&self.path, &seed_workbook(Utc::now()))
    }

    /// Load all four tables from the workbook
    pub fn load_workbook(&self) -> Result<WorkbookData> {
        read_workbook(&self.path)
    }

    /// Load the Inventory table only
    ///
    /// A workbook without an Inventory sheet yields an empty table; a
    /// missing or unreadable file is a read error.
    pub fn load_inventory(&self) -> Result<Vec<InventoryItem>> {
        Ok(self.load_workbook()?.inventory)
    }

    /// Replace the Inventory table and rewrite the workbook
    ///
    /// The other three tables are re-read from disk immediately before the
    /// rewrite so a partial update never loses them. The read-modify-write
    /// is neither locked nor transactional: two concurrent writers race and
    /// the later write wins, silently discarding the earlier one. Deploy
    /// with a single writer.
    pub fn save_inventory(&self, inventory: Vec<InventoryItem>) -> Result<()> {
        let mut data = self.load_workbook()?;
        data.inventory = inventory;
        write_workbook(&self.path, &data)
    }

    /// Validate, append, and persist a new inventory item
    ///
    /// Returns the normalized stored record. Validation failures leave the
    /// workbook untouched.
    ///
    /// # Errors
    /// A validation error when `code` is missing, empty, or duplicate, or a
    /// numeric field is negative; a read/write error when the workbook
    /// cannot be loaded or persisted.
    pub fn add_item(&self, payload: NewItem) -> Result<InventoryItem> {
        let mut inventory = self.load_inventory()?;
        let stored = normalize_new_item(&inventory, payload)?;

        info!(code = %stored.code, "adding inventory item");
        inventory.push(stored.clone());
        self.save_inventory(inventory)?;
        Ok(stored)
    }

    /// Compute the dashboard summary from the current inventory
    pub fn dashboard(&self) -> Result<DashboardSummary> {
        let inventory = self.load_inventory()?;
        Ok(compute_dashboard(&inventory, Utc::now()))
    }
}
