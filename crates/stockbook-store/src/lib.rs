//! Stockbook Store - Workbook persistence layer
//!
//! Provides:
//! - The xlsx codec for the four-sheet workbook (read via calamine, write
//!   via rust_xlsxwriter)
//! - `WorkbookStore`, the path-owning store exposing load, save, add-item,
//!   dashboard and seed operations
//! - Fixed seed data for initialization and demo resets
//!
//! Every operation is a full load plus full rewrite of the backing file.
//! There is no cache across calls and no locking; see
//! [`WorkbookStore::save_inventory`] for the documented single-writer
//! assumption.

pub mod errors;
pub mod seed;
pub mod store;
pub mod workbook;

// Re-export key types
pub use stockbook_core::errors::Result;
pub use store::WorkbookStore;
pub use workbook::WorkbookData;
