//! MCP server command implementations

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::open_db;

/// Run the MCP server over stdio
///
/// Nothing may be printed to stdout here; it carries the protocol.
pub async fn cmd_stdio(db_path: &Path, export_dir: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    info!(
        "Database: {}, exports: {}",
        db_path.display(),
        export_dir.display()
    );

    fintrack_server::serve_stdio(db, export_dir.to_path_buf()).await
}

pub async fn cmd_serve(db_path: &Path, export_dir: &Path, host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting Fintrack MCP server...");
    println!("   Database: {}", db_path.display());
    println!("   Exports: {}", export_dir.display());
    println!("   Listening: http://{}:{}/mcp", host, port);
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;
    fintrack_server::start_mcp_server(db, export_dir.to_path_buf(), host, port).await
}
