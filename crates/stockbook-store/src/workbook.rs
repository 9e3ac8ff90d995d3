//! XLSX codec for the four-sheet workbook
//!
//! Reading goes through calamine; writing through rust_xlsxwriter. Columns
//! are matched by header name on the way in and emitted in canonical order
//! on the way out, so a hand-edited workbook with reordered columns still
//! loads correctly.

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use stockbook_core::errors::Result;
use stockbook_core::model::{
    CountRecord, InventoryItem, Movement, MovementKind, WorkbookConfig, CONFIGURATION_COLUMNS,
    COUNTS_COLUMNS, INVENTORY_COLUMNS, MOVEMENTS_COLUMNS,
};

use crate::errors::{malformed_cell, read_error, write_error};

/// Sheet holding the inventory rows
pub const SHEET_INVENTORY: &str = "Inventory";
/// Sheet holding the append-only movement log
pub const SHEET_MOVEMENTS: &str = "Movements";
/// Sheet holding physical-count snapshots
pub const SHEET_COUNTS: &str = "Counts";
/// Sheet holding the single configuration row
pub const SHEET_CONFIGURATION: &str = "Configuration";

/// WorkbookData - the four typed tables of one workbook file
///
/// A sheet absent from the file parses as an empty table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookData {
    pub inventory: Vec<InventoryItem>,
    pub movements: Vec<Movement>,
    pub counts: Vec<CountRecord>,
    pub configuration: Vec<WorkbookConfig>,
}

/// Parse the workbook file into its four tables
///
/// # Errors
/// Returns a workbook read error when the file is missing, corrupt, or
/// unreadable, and a malformed-cell error when a cell cannot be interpreted
/// as its column's type.
pub fn read_workbook(path: &Path) -> Result<WorkbookData> {
    let mut xlsx: Xlsx<_> = open_workbook(path).map_err(|err| read_error(path, err))?;
    let sheet_names = xlsx.sheet_names().to_owned();

    let mut data = WorkbookData::default();

    if sheet_names.iter().any(|name| name == SHEET_INVENTORY) {
        let range = xlsx
            .worksheet_range(SHEET_INVENTORY)
            .map_err(|err| read_error(path, err))?;
        data.inventory = parse_inventory(&range)?;
    }
    if sheet_names.iter().any(|name| name == SHEET_MOVEMENTS) {
        let range = xlsx
            .worksheet_range(SHEET_MOVEMENTS)
            .map_err(|err| read_error(path, err))?;
        data.movements = parse_movements(&range)?;
    }
    if sheet_names.iter().any(|name| name == SHEET_COUNTS) {
        let range = xlsx
            .worksheet_range(SHEET_COUNTS)
            .map_err(|err| read_error(path, err))?;
        data.counts = parse_counts(&range)?;
    }
    if sheet_names.iter().any(|name| name == SHEET_CONFIGURATION) {
        let range = xlsx
            .worksheet_range(SHEET_CONFIGURATION)
            .map_err(|err| read_error(path, err))?;
        data.configuration = parse_configuration(&range)?;
    }

    Ok(data)
}

/// Rewrite the whole workbook from the given tables
///
/// Emits all four sheets with their canonical columns in order. The file is
/// replaced in full; callers are responsible for having reloaded the tables
/// they do not intend to change.
pub fn write_workbook(path: &Path, data: &WorkbookData) -> Result<()> {
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(SHEET_INVENTORY)
            .map_err(|err| write_error(path, err))?;
        write_headers(sheet, &INVENTORY_COLUMNS).map_err(|err| write_error(path, err))?;
        for (i, item) in data.inventory.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet
                .write_string(row, 0, &item.code)
                .and_then(|s| s.write_string(row, 1, &item.name))
                .and_then(|s| s.write_string(row, 2, &item.category))
                .and_then(|s| s.write_number(row, 3, item.quantity as f64))
                .and_then(|s| s.write_number(row, 4, item.unit_price))
                .and_then(|s| s.write_string(row, 5, &item.location))
                .and_then(|s| s.write_number(row, 6, item.minimum as f64))
                .map_err(|err| write_error(path, err))?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(SHEET_MOVEMENTS)
            .map_err(|err| write_error(path, err))?;
        write_headers(sheet, &MOVEMENTS_COLUMNS).map_err(|err| write_error(path, err))?;
        for (i, movement) in data.movements.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet
                .write_string(row, 0, &movement.code)
                .and_then(|s| s.write_string(row, 1, movement.kind.as_str()))
                .and_then(|s| s.write_number(row, 2, movement.quantity as f64))
                .and_then(|s| s.write_string(row, 3, &movement.date))
                .map_err(|err| write_error(path, err))?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(SHEET_COUNTS)
            .map_err(|err| write_error(path, err))?;
        write_headers(sheet, &COUNTS_COLUMNS).map_err(|err| write_error(path, err))?;
        for (i, count) in data.counts.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet
                .write_string(row, 0, &count.code)
                .and_then(|s| s.write_number(row, 1, count.counted_quantity as f64))
                .and_then(|s| s.write_string(row, 2, &count.date))
                .map_err(|err| write_error(path, err))?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(SHEET_CONFIGURATION)
            .map_err(|err| write_error(path, err))?;
        write_headers(sheet, &CONFIGURATION_COLUMNS).map_err(|err| write_error(path, err))?;
        for (i, config) in data.configuration.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet
                .write_string(row, 0, &config.version)
                .and_then(|s| s.write_string(row, 1, &config.generated_at))
                .map_err(|err| write_error(path, err))?;
        }
    }

    workbook.save(path).map_err(|err| write_error(path, err))?;
    Ok(())
}

fn write_headers<'a>(
    sheet: &'a mut rust_xlsxwriter::Worksheet,
    columns: &[&str],
) -> std::result::Result<&'a mut rust_xlsxwriter::Worksheet, rust_xlsxwriter::XlsxError> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    Ok(sheet)
}

// ===== Sheet parsing =====

/// Column lookup for one sheet: header row plus data rows
struct SheetView<'a> {
    sheet: &'a str,
    headers: Vec<String>,
    rows: Vec<&'a [Data]>,
}

impl<'a> SheetView<'a> {
    fn new(sheet: &'a str, range: &'a Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| header.iter().map(cell_to_string).collect())
            .unwrap_or_default();
        Self {
            sheet,
            headers,
            rows: rows.collect(),
        }
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    fn cell(&self, row: &'a [Data], column: Option<usize>) -> &'a Data {
        column.and_then(|idx| row.get(idx)).unwrap_or(&Data::Empty)
    }

    fn string(&self, row: &'a [Data], column: Option<usize>) -> String {
        cell_to_string(self.cell(row, column))
    }

    fn integer(&self, row: &'a [Data], row_idx: usize, name: &str) -> Result<i64> {
        let cell = self.cell(row, self.column(name));
        cell_to_i64(cell)
            .ok_or_else(|| malformed_cell(self.sheet, row_idx + 2, name, describe_cell(cell)))
    }

    fn float(&self, row: &'a [Data], row_idx: usize, name: &str) -> Result<f64> {
        let cell = self.cell(row, self.column(name));
        cell_to_f64(cell)
            .ok_or_else(|| malformed_cell(self.sheet, row_idx + 2, name, describe_cell(cell)))
    }
}

fn parse_inventory(range: &Range<Data>) -> Result<Vec<InventoryItem>> {
    let view = SheetView::new(SHEET_INVENTORY, range);
    let mut items = Vec::with_capacity(view.rows.len());

    for (idx, row) in view.rows.iter().enumerate() {
        if row_is_blank(row) {
            continue;
        }
        items.push(InventoryItem {
            code: view.string(row, view.column("code")),
            name: view.string(row, view.column("name")),
            category: view.string(row, view.column("category")),
            quantity: view.integer(row, idx, "quantity")?,
            unit_price: view.float(row, idx, "unit_price")?,
            location: view.string(row, view.column("location")),
            minimum: view.integer(row, idx, "minimum")?,
        });
    }
    Ok(items)
}

fn parse_movements(range: &Range<Data>) -> Result<Vec<Movement>> {
    let view = SheetView::new(SHEET_MOVEMENTS, range);
    let mut movements = Vec::with_capacity(view.rows.len());

    for (idx, row) in view.rows.iter().enumerate() {
        if row_is_blank(row) {
            continue;
        }
        let label = view.string(row, view.column("type"));
        let kind = MovementKind::parse(&label).ok_or_else(|| {
            malformed_cell(
                SHEET_MOVEMENTS,
                idx + 2,
                "type",
                format!("expected 'inbound' or 'outbound', got '{label}'"),
            )
        })?;
        movements.push(Movement {
            code: view.string(row, view.column("code")),
            kind,
            quantity: view.integer(row, idx, "quantity")?,
            date: view.string(row, view.column("date")),
        });
    }
    Ok(movements)
}

fn parse_counts(range: &Range<Data>) -> Result<Vec<CountRecord>> {
    let view = SheetView::new(SHEET_COUNTS, range);
    let mut counts = Vec::with_capacity(view.rows.len());

    for (idx, row) in view.rows.iter().enumerate() {
        if row_is_blank(row) {
            continue;
        }
        counts.push(CountRecord {
            code: view.string(row, view.column("code")),
            counted_quantity: view.integer(row, idx, "counted_quantity")?,
            date: view.string(row, view.column("date")),
        });
    }
    Ok(counts)
}

fn parse_configuration(range: &Range<Data>) -> Result<Vec<WorkbookConfig>> {
    let view = SheetView::new(SHEET_CONFIGURATION, range);
    let mut configs = Vec::with_capacity(view.rows.len());

    for row in view.rows.iter() {
        if row_is_blank(row) {
            continue;
        }
        configs.push(WorkbookConfig {
            version: view.string(row, view.column("version")),
            generated_at: view.string(row, view.column("generated_at")),
        });
    }
    Ok(configs)
}

fn row_is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

// ===== Cell conversions =====

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Empty => String::new(),
        Data::Error(e) => format!("{e:?}"),
    }
}

fn cell_to_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        Data::Empty => Some(0),
        _ => None,
    }
}

fn describe_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => format!("non-numeric value '{s}'"),
        other => format!("unexpected cell {other:?}"),
    }
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse().ok(),
        Data::Empty => Some(0.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_i64_accepts_floats_and_strings() {
        assert_eq!(cell_to_i64(&Data::Int(12)), Some(12));
        assert_eq!(cell_to_i64(&Data::Float(45.0)), Some(45));
        assert_eq!(cell_to_i64(&Data::String(" 18 ".to_string())), Some(18));
        assert_eq!(cell_to_i64(&Data::Empty), Some(0));
        assert_eq!(cell_to_i64(&Data::Float(4.5)), None);
    }

    #[test]
    fn test_cell_to_string_formats_whole_floats_as_integers() {
        assert_eq!(cell_to_string(&Data::Float(950.0)), "950");
        assert_eq!(cell_to_string(&Data::Float(25.5)), "25.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
