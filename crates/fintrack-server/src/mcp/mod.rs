//! MCP (Model Context Protocol) Server for Fintrack
//!
//! Exposes the ledger to LLMs via MCP tools for conversational bookkeeping.
//!
//! # Transports
//!
//! - stdio, for desktop MCP clients that spawn the process (`fintrack stdio`)
//! - Streamable HTTP at `/mcp` (`fintrack serve --port 3001`)
//!
//! # Available Tools
//!
//! - `add_transaction` - Record income (positive) or an expense (negative)
//! - `get_balance` - Current balance with a per-category breakdown
//! - `list_transactions` - Newest-first listing, optionally for one category
//! - `add_category` - Create a new category
//! - `list_categories` - Show the valid categories
//! - `export_data` - Write all transactions to a JSON file
//!
//! Every tool answers with plain text. Validation problems are reported in
//! that text; storage failures become MCP internal errors.

mod tools;

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use tokio::sync::Mutex;
use tracing::{error, info};

use fintrack_core::db::Database;

pub use tools::*;

/// Fintrack MCP Server state
#[derive(Clone)]
pub struct FintrackMcpServer {
    /// Database connection (wrapped for thread-safe access)
    db: Arc<Mutex<Database>>,
    /// Directory that receives export files
    export_dir: PathBuf,
    /// Tool router for MCP operations
    tool_router: ToolRouter<Self>,
}

impl FintrackMcpServer {
    /// Create a new MCP server with the given database
    pub fn new(db: Database, export_dir: PathBuf) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            export_dir,
            tool_router: Self::tool_router(),
        }
    }

    /// Get database access for tool implementations
    pub(crate) async fn db(&self) -> tokio::sync::MutexGuard<'_, Database> {
        self.db.lock().await
    }
}

/// Wrap a tool outcome as a single text block, or an internal error
fn text_result(
    tool: &str,
    result: fintrack_core::Result<String>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            error!("Tool {} failed: {}", tool, e);
            Err(McpError::internal_error(e.to_string(), None))
        }
    }
}

#[tool_handler]
impl ServerHandler for FintrackMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "financial-tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Fintrack Personal Finance Ledger".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Fintrack is a personal finance ledger. Record income as positive amounts and \
                 expenses as negative amounts, using one of the available categories. \
                 Use get_balance for totals and list_transactions to review history."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl FintrackMcpServer {
    /// Record a new transaction
    #[tool(
        description = "Add a new financial transaction. Amount is positive for income and negative for expenses; category must be one of the available categories."
    )]
    pub async fn add_transaction(
        &self,
        Parameters(params): Parameters<AddTransactionParams>,
    ) -> Result<CallToolResult, McpError> {
        let db = self.db().await;
        text_result("add_transaction", tools::add_transaction(&db, params))
    }

    /// Current balance and category breakdown
    #[tool(description = "Get current balance and summary of transactions by category.")]
    pub async fn get_balance(&self) -> Result<CallToolResult, McpError> {
        let db = self.db().await;
        text_result("get_balance", tools::get_balance(&db))
    }

    /// List transactions newest first
    #[tool(description = "List all transactions, newest first, optionally filtered by category.")]
    pub async fn list_transactions(
        &self,
        Parameters(params): Parameters<ListTransactionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let db = self.db().await;
        text_result("list_transactions", tools::list_transactions(&db, params))
    }

    #[tool(description = "Add a new transaction category.")]
    pub async fn add_category(
        &self,
        Parameters(params): Parameters<AddCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let db = self.db().await;
        text_result("add_category", tools::add_category(&db, params))
    }

    #[tool(description = "List the categories that transactions can use.")]
    pub async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        let db = self.db().await;
        text_result("list_categories", tools::list_categories(&db))
    }

    /// Export every transaction to the export directory
    #[tool(
        description = "Export all transactions to a file. Only the \"json\" format is supported."
    )]
    pub async fn export_data(
        &self,
        Parameters(params): Parameters<ExportDataParams>,
    ) -> Result<CallToolResult, McpError> {
        let db = self.db().await;
        text_result(
            "export_data",
            tools::export_data(&db, params, &self.export_dir),
        )
    }
}

/// Serve MCP over stdin/stdout until the client disconnects
pub async fn serve_stdio(db: Database, export_dir: PathBuf) -> anyhow::Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting MCP server on stdio");

    let service = FintrackMcpServer::new(db, export_dir)
        .serve(stdio())
        .await?;
    service.waiting().await?;

    info!("MCP stdio session ended");
    Ok(())
}

/// Start the MCP server on the given port
pub async fn start_mcp_server(
    db: Database,
    export_dir: PathBuf,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
    use rmcp::transport::streamable_http_server::StreamableHttpService;

    info!("Starting MCP server at http://{}:{}/mcp", host, port);

    let service = StreamableHttpService::new(
        move || Ok(FintrackMcpServer::new(db.clone(), export_dir.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("MCP server ready at http://{}/mcp", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            // Wait for shutdown signal
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
