//! Fintrack Server
//!
//! Exposes the ledger tools over the Model Context Protocol.
//! See [`mcp`] for the available tools and transports.

pub mod mcp;

pub use mcp::{serve_stdio, start_mcp_server, FintrackMcpServer};
