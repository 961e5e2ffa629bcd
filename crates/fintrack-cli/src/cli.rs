//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fintrack - A small personal finance ledger with MCP tools
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Personal finance ledger exposed as MCP tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, env = "FINTRACK_DB", default_value = "fintrack.db", global = true)]
    pub db: PathBuf,

    /// Directory that receives export files
    #[arg(long, env = "FINTRACK_EXPORT_DIR", default_value = ".", global = true)]
    pub export_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed default categories
    Init,

    /// Run the MCP server over stdin/stdout
    ///
    /// This is the transport desktop MCP clients use when they launch
    /// the server as a subprocess.
    Stdio,

    /// Run the MCP server over Streamable HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Add a transaction (positive for income, negative for expenses)
    Add {
        /// Transaction amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Category name (see `fintrack categories`)
        category: String,

        /// Free-text description
        #[arg(default_value = "")]
        description: String,
    },

    /// Show current balance and per-category breakdown
    Balance,

    /// List transactions, newest first
    List {
        /// Only show transactions in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List or add categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Export all transactions to the export directory
    Export {
        /// Export format (only json is supported)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },
}
