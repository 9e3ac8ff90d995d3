use serde::{Deserialize, Serialize};

/// Canonical column order for the Counts sheet
pub const COUNTS_COLUMNS: [&str; 3] = ["code", "counted_quantity", "date"];

/// CountRecord - one physical-count snapshot row
///
/// Like movements, counts are descriptive: they are never reconciled against
/// the Inventory sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRecord {
    /// Product code that was counted
    pub code: String,

    /// Quantity found during the count
    pub counted_quantity: i64,

    /// Date of the count (ISO date)
    pub date: String,
}
