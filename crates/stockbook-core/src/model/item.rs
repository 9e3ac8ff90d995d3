use serde::{Deserialize, Serialize};

/// Canonical column order for the Inventory sheet
///
/// The persisted sheet always carries exactly these seven columns in this
/// order. Readers match columns by header name; writers emit this order.
pub const INVENTORY_COLUMNS: [&str; 7] = [
    "code",
    "name",
    "category",
    "quantity",
    "unit_price",
    "location",
    "minimum",
];

/// InventoryItem - one row of the Inventory sheet
///
/// `code` is the unique, non-empty key. `minimum` is the reorder threshold:
/// a row with `quantity <= minimum` counts as low stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique product code (e.g. `PRD-001`)
    pub code: String,

    /// Human-readable product name
    pub name: String,

    /// Category or family
    pub category: String,

    /// Quantity in stock
    pub quantity: i64,

    /// Unit price
    pub unit_price: f64,

    /// Warehouse location
    pub location: String,

    /// Minimum stock threshold
    pub minimum: i64,
}

impl InventoryItem {
    /// Check whether this item is at or below its minimum threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum
    }

    /// Total value held in stock for this item
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Incoming payload for adding an inventory item
///
/// Only `code` is semantically required; every other field falls back to a
/// type-appropriate default (empty string, zero). `code` is an `Option` so
/// that an absent field reaches validation instead of failing
/// deserialization, which lets the API return the store's own message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub unit_price: f64,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub minimum: i64,
}

impl NewItem {
    /// Create a payload carrying only a code, everything else defaulted
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }
}
