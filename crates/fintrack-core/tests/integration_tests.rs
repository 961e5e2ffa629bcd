//! Integration tests for fintrack-core
//!
//! These tests exercise the tool layer end to end against a real database file:
//! add → list → balance → export.

use fintrack_core::{
    db::Database,
    tools::{
        self, AddCategoryParams, AddTransactionParams, ExportDataParams, ListTransactionsParams,
    },
    TransactionExport, DEFAULT_CATEGORIES, EXPORT_FILE_NAME,
};

fn add(db: &Database, amount: f64, category: &str, description: &str) -> String {
    tools::add_transaction(
        db,
        AddTransactionParams {
            amount,
            category: category.to_string(),
            description: description.to_string(),
        },
    )
    .expect("add_transaction failed")
}

fn list(db: &Database, category: Option<&str>) -> String {
    tools::list_transactions(
        db,
        ListTransactionsParams {
            category: category.map(str::to_string),
        },
    )
    .expect("list_transactions failed")
}

// =============================================================================
// Ledger workflow
// =============================================================================

#[test]
fn test_added_transaction_is_newest_in_its_category() {
    let db = Database::in_memory().expect("Failed to create database");

    add(&db, -8.0, "Transportation", "Bus pass");
    add(&db, -30.0, "Transportation", "Taxi");
    add(&db, -12.75, "Entertainment", "Cinema");

    let listing = list(&db, Some("Transportation"));
    let first_line = listing.lines().next().unwrap();
    assert_eq!(first_line, "$-30.00 (Transportation) - Taxi");
    assert_eq!(listing.lines().count(), 2);
}

#[test]
fn test_invalid_category_never_writes() {
    let db = Database::in_memory().expect("Failed to create database");
    let expected = format!(
        "Invalid category. Please use one of: {}",
        DEFAULT_CATEGORIES.join(", ")
    );

    for bad in ["Rent", "", "FOOD", " Food"] {
        assert_eq!(add(&db, 1.0, bad, "x"), expected);
        assert_eq!(list(&db, Some(bad)), expected);
    }
    assert_eq!(db.count_transactions().unwrap(), 0);
}

#[test]
fn test_balance_scenario() {
    let db = Database::in_memory().expect("Failed to create database");
    assert_eq!(
        tools::get_balance(&db).unwrap(),
        "No transactions recorded yet."
    );

    add(&db, 100.0, "Income", "Paycheck");
    add(&db, -20.5, "Food", "Groceries");
    add(&db, -5.25, "Food", "Snack");

    let balance = tools::get_balance(&db).unwrap();
    let lines: Vec<&str> = balance.lines().collect();
    assert_eq!(lines[0], "Current balance: $74.25");
    assert!(lines.contains(&"Food: $-25.75"));
    assert!(lines.contains(&"Income: $100.00"));
    assert!(!balance.contains("Utilities"));
}

#[test]
fn test_custom_category_lifecycle() {
    let db = Database::in_memory().expect("Failed to create database");

    let msg = tools::add_category(
        &db,
        AddCategoryParams {
            name: "Pets".to_string(),
        },
    )
    .unwrap();
    assert_eq!(msg, "Category 'Pets' added successfully.");

    let again = tools::add_category(
        &db,
        AddCategoryParams {
            name: "Pets".to_string(),
        },
    )
    .unwrap();
    assert_eq!(again, "Category 'Pets' already exists.");

    assert!(tools::list_categories(&db).unwrap().ends_with("Other, Pets"));
    assert_eq!(
        add(&db, -40.0, "Pets", "Vet"),
        "Transaction added: $-40.00 (Pets) - Vet"
    );
}

#[test]
fn test_export_snapshot_matches_listing() {
    let db = Database::in_memory().expect("Failed to create database");
    let dir = tempfile::tempdir().unwrap();

    add(&db, 1.0, "Income", "A");
    add(&db, 2.0, "Income", "B");
    add(&db, 3.0, "Income", "C");

    let rejected = tools::export_data(
        &db,
        ExportDataParams {
            format: "csv".to_string(),
        },
        dir.path(),
    )
    .unwrap();
    assert!(rejected.starts_with("Unsupported export format: csv"));
    assert!(!dir.path().join(EXPORT_FILE_NAME).exists());

    tools::export_data(&db, ExportDataParams::default(), dir.path()).unwrap();

    let content = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
    let exported: Vec<TransactionExport> = serde_json::from_str(&content).unwrap();
    let descriptions: Vec<&str> = exported.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["C", "B", "A"]);
}

#[test]
fn test_second_handle_sees_writes() {
    let db = Database::in_memory().expect("Failed to create database");
    let other = Database::new(db.path()).expect("Failed to reopen database");

    add(&db, -9.99, "Utilities", "Phone");
    assert_eq!(list(&other, None), "$-9.99 (Utilities) - Phone");
}
