//! Ledger command implementations
//!
//! Thin wrappers over `fintrack_core::tools`, so the shell sees exactly the
//! text an MCP client would.

use std::path::Path;

use anyhow::{Context, Result};
use fintrack_core::db::Database;
use fintrack_core::tools::{
    self, AddCategoryParams, AddTransactionParams, ExportDataParams, ListTransactionsParams,
};

pub fn cmd_add(db: &Database, amount: f64, category: &str, description: &str) -> Result<()> {
    let message = tools::add_transaction(
        db,
        AddTransactionParams {
            amount,
            category: category.to_string(),
            description: description.to_string(),
        },
    )
    .context("Failed to add transaction")?;
    println!("{}", message);
    Ok(())
}

pub fn cmd_balance(db: &Database) -> Result<()> {
    let message = tools::get_balance(db).context("Failed to compute balance")?;
    println!("{}", message);
    Ok(())
}

pub fn cmd_list(db: &Database, category: Option<String>) -> Result<()> {
    let message = tools::list_transactions(db, ListTransactionsParams { category })
        .context("Failed to list transactions")?;
    println!("{}", message);
    Ok(())
}

pub fn cmd_categories_list(db: &Database) -> Result<()> {
    let message = tools::list_categories(db).context("Failed to list categories")?;
    println!("{}", message);
    Ok(())
}

pub fn cmd_categories_add(db: &Database, name: &str) -> Result<()> {
    let message = tools::add_category(
        db,
        AddCategoryParams {
            name: name.to_string(),
        },
    )
    .context("Failed to add category")?;
    println!("{}", message);
    Ok(())
}

pub fn cmd_export(db: &Database, format: &str, export_dir: &Path) -> Result<()> {
    let message = tools::export_data(
        db,
        ExportDataParams {
            format: format.to_string(),
        },
        export_dir,
    )
    .with_context(|| format!("Failed to export to {}", export_dir.display()))?;
    println!("{}", message);
    Ok(())
}
