//! Error helpers for stockbook-store
//!
//! Maps the I/O layers (calamine, rust_xlsxwriter, std::io) onto the shared
//! [`StockbookError`] taxonomy.

use std::path::Path;

use stockbook_core::errors::StockbookError;

/// Build a workbook read error from a calamine failure
pub fn read_error(path: &Path, err: calamine::XlsxError) -> StockbookError {
    StockbookError::WorkbookRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Build a workbook write error from a rust_xlsxwriter failure
pub fn write_error(path: &Path, err: rust_xlsxwriter::XlsxError) -> StockbookError {
    StockbookError::WorkbookWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Build a workbook write error from a filesystem failure
pub fn io_error(path: &Path, err: std::io::Error) -> StockbookError {
    StockbookError::WorkbookWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Build a malformed-cell read error
///
/// `row` is the 1-based row in the sheet as a user would see it in a
/// spreadsheet application.
pub fn malformed_cell(sheet: &str, row: usize, column: &str, message: String) -> StockbookError {
    StockbookError::MalformedCell {
        sheet: sheet.to_string(),
        row,
        column: column.to_string(),
        message,
    }
}
