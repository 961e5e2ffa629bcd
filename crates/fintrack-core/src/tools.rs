//! Ledger tool implementations
//!
//! Each tool validates its input, calls into the [`Database`] and renders the
//! outcome as plain text. They are used by:
//! 1. The MCP server for external LLM clients
//! 2. The `fintrack` CLI subcommands
//!
//! Expected failures (unknown category, empty name, unsupported format, no data)
//! come back as `Ok` with a human-readable message. Only storage and
//! filesystem failures are returned as `Err`.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::db::Database;
use crate::error::{Error, Result};

pub const NO_TRANSACTIONS: &str = "No transactions recorded yet.";
pub const EMPTY_CATEGORY_NAME: &str = "Category name cannot be empty.";
pub const INVALID_AMOUNT: &str = "Invalid amount. Please provide a finite number.";

fn invalid_category_message(categories: &[String]) -> String {
    format!(
        "Invalid category. Please use one of: {}",
        categories.join(", ")
    )
}

/// Returns the rejection message when `category` is unknown
fn check_category(db: &Database, category: &str) -> Result<Option<String>> {
    if db.category_exists(category)? {
        return Ok(None);
    }
    warn!("Rejected unknown category '{}'", category);
    let categories = db.list_categories()?;
    Ok(Some(invalid_category_message(&categories)))
}

// =============================================================================
// add_transaction
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddTransactionParams {
    #[schemars(description = "Transaction amount (positive for income, negative for expenses)")]
    pub amount: f64,

    #[schemars(description = "Transaction category (e.g., \"Food\", \"Transportation\")")]
    pub category: String,

    #[schemars(description = "Description of the transaction")]
    pub description: String,
}

pub fn add_transaction(db: &Database, params: AddTransactionParams) -> Result<String> {
    if !params.amount.is_finite() {
        warn!("Rejected non-finite amount {}", params.amount);
        return Ok(INVALID_AMOUNT.to_string());
    }

    if let Some(message) = check_category(db, &params.category)? {
        return Ok(message);
    }

    db.insert_transaction(params.amount, &params.category, &params.description)?;

    Ok(format!(
        "Transaction added: ${:.2} ({}) - {}",
        params.amount, params.category, params.description
    ))
}

// =============================================================================
// get_balance
// =============================================================================

pub fn get_balance(db: &Database) -> Result<String> {
    if db.count_transactions()? == 0 {
        return Ok(NO_TRANSACTIONS.to_string());
    }

    let total = db.sum_total()?;
    let by_category = db.sum_by_category()?;

    let mut summary = vec![format!("Current balance: ${:.2}", total)];
    summary.push("\nBreakdown by category:".to_string());
    for (category, amount) in &by_category {
        summary.push(format!("{}: ${:.2}", category, amount));
    }

    Ok(summary.join("\n"))
}

// =============================================================================
// list_transactions
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListTransactionsParams {
    #[schemars(description = "Optional category to filter transactions")]
    pub category: Option<String>,
}

pub fn list_transactions(db: &Database, params: ListTransactionsParams) -> Result<String> {
    if let Some(category) = params.category.as_deref() {
        if let Some(message) = check_category(db, category)? {
            return Ok(message);
        }
    }

    let transactions = db.list_transactions(params.category.as_deref())?;

    if transactions.is_empty() {
        return Ok(match params.category {
            Some(category) => format!("No transactions found in category: {}", category),
            None => NO_TRANSACTIONS.to_string(),
        });
    }

    Ok(transactions
        .iter()
        .map(|t| t.summary_line())
        .collect::<Vec<_>>()
        .join("\n"))
}

// =============================================================================
// add_category / list_categories
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCategoryParams {
    #[schemars(description = "Name of the new category")]
    pub name: String,
}

pub fn add_category(db: &Database, params: AddCategoryParams) -> Result<String> {
    let name = params.name.trim();
    if name.is_empty() {
        warn!("Rejected empty category name");
        return Ok(EMPTY_CATEGORY_NAME.to_string());
    }

    match db.insert_category(name) {
        Ok(_) => Ok(format!("Category '{}' added successfully.", name)),
        Err(Error::DuplicateCategory(existing)) => {
            Ok(format!("Category '{}' already exists.", existing))
        }
        Err(e) => Err(e),
    }
}

pub fn list_categories(db: &Database) -> Result<String> {
    let categories = db.list_categories()?;
    Ok(format!("Available categories: {}", categories.join(", ")))
}

// =============================================================================
// export_data
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExportDataParams {
    #[schemars(description = "Export format. Only \"json\" is supported")]
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "json".to_string()
}

impl Default for ExportDataParams {
    fn default() -> Self {
        Self {
            format: default_export_format(),
        }
    }
}

/// Export every transaction into `export_dir`
pub fn export_data(db: &Database, params: ExportDataParams, export_dir: &Path) -> Result<String> {
    if !params.format.eq_ignore_ascii_case("json") {
        warn!("Rejected export format '{}'", params.format);
        return Ok(format!(
            "Unsupported export format: {}. Only 'json' is supported.",
            params.format
        ));
    }

    let (path, count) = db.write_json_export(export_dir)?;
    Ok(format!("Exported {} transactions to {}", count, path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::EXPORT_FILE_NAME;

    fn create_test_db() -> Database {
        Database::in_memory().unwrap()
    }

    fn add(db: &Database, amount: f64, category: &str, description: &str) -> String {
        add_transaction(
            db,
            AddTransactionParams {
                amount,
                category: category.to_string(),
                description: description.to_string(),
            },
        )
        .unwrap()
    }

    fn list(db: &Database, category: Option<&str>) -> String {
        list_transactions(
            db,
            ListTransactionsParams {
                category: category.map(str::to_string),
            },
        )
        .unwrap()
    }

    const INVALID: &str = "Invalid category. Please use one of: Income, Food, Transportation, Utilities, Entertainment, Other";

    #[test]
    fn test_add_transaction_confirms() {
        let db = create_test_db();
        let msg = add(&db, 100.0, "Income", "Salary");
        assert_eq!(msg, "Transaction added: $100.00 (Income) - Salary");
        assert_eq!(db.count_transactions().unwrap(), 1);
    }

    #[test]
    fn test_add_transaction_invalid_category() {
        let db = create_test_db();
        let msg = add(&db, 5.0, "Groceries", "Apples");
        assert_eq!(msg, INVALID);
        assert_eq!(db.count_transactions().unwrap(), 0);
    }

    #[test]
    fn test_add_transaction_category_is_case_sensitive() {
        let db = create_test_db();
        assert_eq!(add(&db, 5.0, "food", "Apples"), INVALID);
    }

    #[test]
    fn test_add_transaction_rejects_non_finite() {
        let db = create_test_db();
        assert_eq!(add(&db, f64::NAN, "Food", "x"), INVALID_AMOUNT);
        assert_eq!(add(&db, f64::INFINITY, "Food", "x"), INVALID_AMOUNT);
        assert_eq!(db.count_transactions().unwrap(), 0);
    }

    #[test]
    fn test_get_balance_empty() {
        let db = create_test_db();
        assert_eq!(get_balance(&db).unwrap(), "No transactions recorded yet.");
    }

    #[test]
    fn test_get_balance_breakdown() {
        let db = create_test_db();
        add(&db, 100.0, "Income", "Salary");
        add(&db, -20.5, "Food", "Lunch");
        add(&db, -5.25, "Food", "Coffee");

        let balance = get_balance(&db).unwrap();
        assert_eq!(
            balance,
            "Current balance: $74.25\n\nBreakdown by category:\nFood: $-25.75\nIncome: $100.00"
        );
    }

    #[test]
    fn test_list_transactions_newest_first() {
        let db = create_test_db();
        add(&db, 1.0, "Income", "A");
        add(&db, -2.0, "Food", "B");
        add(&db, -3.0, "Other", "C");

        assert_eq!(
            list(&db, None),
            "$-3.00 (Other) - C\n$-2.00 (Food) - B\n$1.00 (Income) - A"
        );
    }

    #[test]
    fn test_list_transactions_filtered() {
        let db = create_test_db();
        add(&db, 1.0, "Income", "A");
        add(&db, -2.0, "Food", "B");
        add(&db, -4.0, "Food", "D");

        assert_eq!(list(&db, Some("Food")), "$-4.00 (Food) - D\n$-2.00 (Food) - B");
    }

    #[test]
    fn test_list_transactions_messages() {
        let db = create_test_db();
        assert_eq!(list(&db, None), NO_TRANSACTIONS);
        // Unknown category wins over the empty-store message
        assert_eq!(list(&db, Some("Nope")), INVALID);

        add(&db, 1.0, "Income", "A");
        assert_eq!(
            list(&db, Some("Utilities")),
            "No transactions found in category: Utilities"
        );
    }

    #[test]
    fn test_add_category() {
        let db = create_test_db();
        let msg = add_category(
            &db,
            AddCategoryParams {
                name: "  Health ".to_string(),
            },
        )
        .unwrap();
        assert_eq!(msg, "Category 'Health' added successfully.");
        assert!(db.category_exists("Health").unwrap());

        // New category is accepted by add_transaction right away
        assert_eq!(
            add(&db, -12.0, "Health", "Pharmacy"),
            "Transaction added: $-12.00 (Health) - Pharmacy"
        );
    }

    #[test]
    fn test_add_category_duplicate() {
        let db = create_test_db();
        let before = db.count_categories().unwrap();
        let msg = add_category(
            &db,
            AddCategoryParams {
                name: "Food".to_string(),
            },
        )
        .unwrap();
        assert_eq!(msg, "Category 'Food' already exists.");
        assert_eq!(db.count_categories().unwrap(), before);
    }

    #[test]
    fn test_add_category_empty() {
        let db = create_test_db();
        let before = db.count_categories().unwrap();
        for name in ["", "   ", "\t\n"] {
            let msg = add_category(
                &db,
                AddCategoryParams {
                    name: name.to_string(),
                },
            )
            .unwrap();
            assert_eq!(msg, EMPTY_CATEGORY_NAME);
        }
        assert_eq!(db.count_categories().unwrap(), before);
    }

    #[test]
    fn test_list_categories() {
        let db = create_test_db();
        assert_eq!(
            list_categories(&db).unwrap(),
            "Available categories: Income, Food, Transportation, Utilities, Entertainment, Other"
        );
    }

    #[test]
    fn test_export_data_unsupported_format() {
        let db = create_test_db();
        let dir = tempfile::tempdir().unwrap();
        let msg = export_data(
            &db,
            ExportDataParams {
                format: "xml".to_string(),
            },
            dir.path(),
        )
        .unwrap();
        assert_eq!(msg, "Unsupported export format: xml. Only 'json' is supported.");
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_export_data_json_case_insensitive() {
        let db = create_test_db();
        let dir = tempfile::tempdir().unwrap();
        add(&db, 100.0, "Income", "Salary");
        add(&db, -20.5, "Food", "Lunch");

        let msg = export_data(
            &db,
            ExportDataParams {
                format: "JSON".to_string(),
            },
            dir.path(),
        )
        .unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        assert_eq!(msg, format!("Exported 2 transactions to {}", path.display()));

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_export_params_default_to_json() {
        let params: ExportDataParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.format, "json");
        assert_eq!(ExportDataParams::default().format, "json");
    }
}
