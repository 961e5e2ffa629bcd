//! Fintrack CLI - Personal finance ledger
//!
//! Usage:
//!   fintrack init                   Initialize database
//!   fintrack stdio                  Run the MCP server on stdio
//!   fintrack serve --port 3001      Run the MCP server over HTTP
//!   fintrack add -12.5 Food Lunch   Record a transaction

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr: stdout carries MCP frames in stdio mode
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Stdio => commands::cmd_stdio(&cli.db, &cli.export_dir).await,
        Commands::Serve { port, host } => {
            commands::cmd_serve(&cli.db, &cli.export_dir, &host, port).await
        }
        Commands::Add {
            amount,
            category,
            description,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(&db, amount, &category, &description)
        }
        Commands::Balance => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_balance(&db)
        }
        Commands::List { category } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db, category)
        }
        Commands::Categories { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(CategoriesAction::List) => commands::cmd_categories_list(&db),
                Some(CategoriesAction::Add { name }) => commands::cmd_categories_add(&db, &name),
            }
        }
        Commands::Export { format } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_export(&db, &format, &cli.export_dir)
        }
    }
}
