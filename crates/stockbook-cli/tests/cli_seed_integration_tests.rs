//! CLI integration tests
//!
//! These verify that the CLI subcommands delegate to the store layer and
//! leave a readable workbook behind.

use std::process::Command;

use tempfile::TempDir;

use stockbook_core::model::NewItem;
use stockbook_store::WorkbookStore;

#[test]
fn test_cli_seed_writes_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("inventory.xlsx");

    let cli_bin = env!("CARGO_BIN_EXE_stockbook-cli");
    let output = Command::new(cli_bin)
        .args(["seed", "--data", data_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "seed failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let inventory = WorkbookStore::new(data_path).load_inventory().unwrap();
    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory[0].code, "PRD-001");
}

#[test]
fn test_cli_seed_resets_existing_workbook() {
    // Given: a seeded workbook with one extra item
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("inventory.xlsx");
    let store = WorkbookStore::new(data_path.clone());
    store.ensure_initialized().unwrap();
    store.add_item(NewItem::with_code("PRD-010")).unwrap();
    assert_eq!(store.load_inventory().unwrap().len(), 4);

    // When: we reseed through the CLI
    let cli_bin = env!("CARGO_BIN_EXE_stockbook-cli");
    let output = Command::new(cli_bin)
        .args(["seed", "--data", data_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success());

    // Then: the extra item is gone
    assert_eq!(store.load_inventory().unwrap().len(), 3);
}

#[test]
fn test_cli_init_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("inventory.xlsx");
    let store = WorkbookStore::new(data_path.clone());
    store.ensure_initialized().unwrap();
    store.add_item(NewItem::with_code("PRD-010")).unwrap();

    let cli_bin = env!("CARGO_BIN_EXE_stockbook-cli");
    let output = Command::new(cli_bin)
        .args(["init", "--data", data_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success());

    // Init must not discard the extra item
    assert_eq!(store.load_inventory().unwrap().len(), 4);
}

#[test]
fn test_cli_dashboard_prints_summary_json() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("inventory.xlsx");
    WorkbookStore::new(data_path.clone())
        .ensure_initialized()
        .unwrap();

    let cli_bin = env!("CARGO_BIN_EXE_stockbook-cli");
    let output = Command::new(cli_bin)
        .args(["dashboard", "--data", data_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["total_items"], 3);
    assert_eq!(summary["stock_value"], 14707.50);
}
