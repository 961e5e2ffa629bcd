//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db)
//! - `ledger` - Transaction, balance, category and export commands
//! - `serve` - MCP server commands (stdio and HTTP)

pub mod core;
pub mod ledger;
pub mod serve;

// Re-export command functions for main.rs
pub use self::core::*;
pub use ledger::*;
pub use serve::*;
