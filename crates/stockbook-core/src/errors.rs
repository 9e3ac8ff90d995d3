use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StockbookError
pub type Result<T> = std::result::Result<T, StockbookError>;

/// Error taxonomy for Stockbook operations
///
/// Two families exist: validation errors (missing/empty/duplicate code,
/// negative numeric input) are recoverable and surfaced to the caller with a
/// human-readable message; read/write errors are fatal for the current
/// request. [`StockbookError::is_validation`] tells them apart so the API
/// layer can map validation to a client error status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StockbookError {
    // ===== Validation Errors =====
    /// The `code` field is required on every inventory item
    #[error("The 'code' field is required")]
    MissingCode,

    /// Item code must be non-empty
    #[error("Item code cannot be empty")]
    EmptyCode,

    /// Item code already exists in the inventory
    #[error("An item with code {code} already exists")]
    DuplicateCode { code: String },

    /// A numeric field was given a negative value
    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    // ===== Workbook I/O Errors =====
    /// Workbook file could not be opened or parsed
    #[error("Failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// Workbook file could not be written
    #[error("Failed to write workbook {path}: {message}")]
    WorkbookWrite { path: PathBuf, message: String },

    /// A sheet held a cell the codec could not interpret
    #[error("Malformed cell in sheet '{sheet}' row {row}, column '{column}': {message}")]
    MalformedCell {
        sheet: String,
        row: usize,
        column: String,
        message: String,
    },
}

impl StockbookError {
    /// Whether this error is a recoverable validation failure
    ///
    /// Validation errors map to a 400-class response; everything else is
    /// treated as an internal failure for the current request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StockbookError::MissingCode
                | StockbookError::EmptyCode
                | StockbookError::DuplicateCode { .. }
                | StockbookError::NegativeValue { .. }
        )
    }
}
