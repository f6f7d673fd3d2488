//! # Bridge MCP Server
//!
//! Model Context Protocol server exposing Jira search, issue creation and
//! assignment as tools. Every tool answers with a single text block; failures
//! are reported in that text rather than as protocol errors.

pub mod context;
mod handlers;
pub mod query;
pub mod server;
pub mod tools;
pub mod types;

pub use context::ServerContext;
pub use query::{QueryResolver, QueryStrategy, Resolution, ResolutionSource, Unresolved};
pub use server::JiraBridgeServer;
pub use types::{ToolFailure, ToolResult};
