//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes key lookup, missing-key scans and translation edits to AI
//! assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{Transl8McpServer, run_server};
