use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::InventoryItem;

/// DashboardSummary - aggregate view over the current inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of inventory rows
    pub total_items: usize,

    /// Sum of quantities across all rows
    pub total_quantity: i64,

    /// Sum of quantity x unit price, rounded to 2 decimals
    pub stock_value: f64,

    /// Rows where quantity <= minimum threshold
    pub low_stock_count: usize,

    /// When this summary was generated
    pub timestamp: DateTime<Utc>,
}

/// Compute the dashboard summary for the given inventory
///
/// An empty inventory yields zero totals rather than an error.
pub fn compute_dashboard(inventory: &[InventoryItem], timestamp: DateTime<Utc>) -> DashboardSummary {
    let total_quantity = inventory.iter().map(|item| item.quantity).sum();
    let stock_value: f64 = inventory.iter().map(InventoryItem::stock_value).sum();

    DashboardSummary {
        total_items: inventory.len(),
        total_quantity,
        stock_value: round2(stock_value),
        low_stock_count: inventory.iter().filter(|i| i.is_low_stock()).count(),
        timestamp,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
