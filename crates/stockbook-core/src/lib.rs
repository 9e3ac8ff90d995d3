//! Stockbook Core - Domain model for the workbook-backed inventory
//!
//! This crate provides the foundational data structures and rules for
//! Stockbook, including:
//! - Typed records for the four workbook sheets with canonical column order
//! - The error taxonomy shared by the store and the API layer
//! - New-item validation and default filling
//! - Dashboard summary computation
//!
//! Persistence itself lives in `stockbook-store`; this crate is pure.

pub mod dashboard;
pub mod errors;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use dashboard::{compute_dashboard, DashboardSummary};
pub use errors::{Result, StockbookError};
pub use model::{CountRecord, InventoryItem, Movement, MovementKind, NewItem, WorkbookConfig};
