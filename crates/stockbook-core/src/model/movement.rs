use serde::{Deserialize, Serialize};

/// Canonical column order for the Movements sheet
pub const MOVEMENTS_COLUMNS: [&str; 4] = ["code", "type", "quantity", "date"];

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Inbound,
    Outbound,
}

impl MovementKind {
    /// Stable wire/cell label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "inbound",
            MovementKind::Outbound => "outbound",
        }
    }

    /// Parse the cell label back into a kind
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "inbound" => Some(MovementKind::Inbound),
            "outbound" => Some(MovementKind::Outbound),
            _ => None,
        }
    }
}

/// Movement - one row of the append-only Movements log
///
/// `code` references an inventory code descriptively; it is never validated
/// against the current Inventory sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Product code this movement refers to
    pub code: String,

    /// Inbound or outbound
    #[serde(rename = "type")]
    pub kind: MovementKind,

    /// Quantity moved
    pub quantity: i64,

    /// Timestamp of the movement (RFC 3339)
    pub date: String,
}
