//! Fintrack Core Library
//!
//! Shared functionality for the Fintrack personal finance ledger:
//! - Database access, schema creation and default category seeding
//! - Tool operations (validation and text formatting) used by the MCP server and CLI
//! - JSON export of the full transaction history

pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod tools;

pub use db::Database;
pub use error::{Error, Result};
pub use export::{TransactionExport, EXPORT_FILE_NAME};
pub use models::{Transaction, DEFAULT_CATEGORIES};
