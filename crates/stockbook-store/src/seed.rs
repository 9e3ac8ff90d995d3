//! Fixed seed data
//!
//! Used both by `ensure_initialized` (first run against a missing file) and
//! by `seed_sample_data` (unconditional demo reset). The three placeholder
//! products are stable: tests and the original dashboard numbers depend on
//! them.

use chrono::{DateTime, Utc};

use stockbook_core::model::{CountRecord, InventoryItem, Movement, MovementKind, WorkbookConfig};

use crate::workbook::WorkbookData;

/// The three placeholder products
pub fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            code: "PRD-001".to_string(),
            name: "Laptop".to_string(),
            category: "Technology".to_string(),
            quantity: 12,
            unit_price: 950.0,
            location: "A1".to_string(),
            minimum: 5,
        },
        InventoryItem {
            code: "PRD-002".to_string(),
            name: "Wireless Mouse".to_string(),
            category: "Accessories".to_string(),
            quantity: 45,
            unit_price: 25.5,
            location: "B3".to_string(),
            minimum: 10,
        },
        InventoryItem {
            code: "PRD-003".to_string(),
            name: "Ergonomic Chair".to_string(),
            category: "Office".to_string(),
            quantity: 18,
            unit_price: 120.0,
            location: "C2".to_string(),
            minimum: 6,
        },
    ]
}

/// Seed movements matching the placeholder products
pub fn seed_movements(now: DateTime<Utc>) -> Vec<Movement> {
    let stamp = now.to_rfc3339();
    vec![
        Movement {
            code: "PRD-001".to_string(),
            kind: MovementKind::Inbound,
            quantity: 5,
            date: stamp.clone(),
        },
        Movement {
            code: "PRD-002".to_string(),
            kind: MovementKind::Outbound,
            quantity: 2,
            date: stamp.clone(),
        },
        Movement {
            code: "PRD-003".to_string(),
            kind: MovementKind::Inbound,
            quantity: 4,
            date: stamp,
        },
    ]
}

/// Seed physical counts matching the placeholder quantities
pub fn seed_counts(now: DateTime<Utc>) -> Vec<CountRecord> {
    let date = now.date_naive().to_string();
    vec![
        CountRecord {
            code: "PRD-001".to_string(),
            counted_quantity: 12,
            date: date.clone(),
        },
        CountRecord {
            code: "PRD-002".to_string(),
            counted_quantity: 45,
            date: date.clone(),
        },
        CountRecord {
            code: "PRD-003".to_string(),
            counted_quantity: 18,
            date,
        },
    ]
}

/// Assemble a complete seed workbook stamped with the given time
pub fn seed_workbook(now: DateTime<Utc>) -> WorkbookData {
    WorkbookData {
        inventory: seed_inventory(),
        movements: seed_movements(now),
        counts: seed_counts(now),
        configuration: vec![WorkbookConfig::generated(now.to_rfc3339())],
    }
}
