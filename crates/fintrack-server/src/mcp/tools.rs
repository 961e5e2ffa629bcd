//! MCP Tool implementations for Fintrack
//!
//! Re-exports from fintrack_core::tools for MCP server use.
//! The actual implementations live in fintrack-core so they can be shared
//! with the CLI.

pub use fintrack_core::tools::{
    // Functions
    add_category,
    add_transaction,
    export_data,
    get_balance,
    list_categories,
    list_transactions,
    // Params types
    AddCategoryParams,
    AddTransactionParams,
    ExportDataParams,
    ListTransactionsParams,
};
