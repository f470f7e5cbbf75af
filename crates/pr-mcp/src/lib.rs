//! MCP Server for PR preparation
//!
//! This crate exposes pull-request preparation functionality via the Model
//! Context Protocol (MCP), letting agentic clients (like Claude Desktop)
//! analyze branch changes, browse the team's PR templates and guidelines,
//! and get a template suggestion for the change at hand.
//!
//! # Architecture
//!
//! The `pr-mcp` crate is a thin protocol layer over two libraries:
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ pr-mcp (MCP Server) ]
//!        | (Rust API)
//!        +--> [ pr-git    (git subprocess queries) ]
//!        +--> [ pr-review (templates / guidelines / policy) ]
//! ```
//!
//! # Tools
//!
//! - `analyze_file_changes` - Diff, statistics, and commits against a base branch
//! - `get_pr_templates` - The registered PR templates with content
//! - `suggest_template` - Template suggestion for a described change
//!
//! # Resources
//!
//! - `file://templates/{filename}` - A single PR template
//! - `file://team-guidelines/{filename}` - A single guideline document
//! - `git://recent-changes` - Recent commit history as JSON
//! - `team://review-process` - The static review-process policy

pub mod context;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod resource_handlers;
pub mod resources;
pub mod server;
pub mod tools;

pub use context::{ServerContext, ServerPaths};
pub use error::{Error, Result};
pub use resources::{get_resource_definitions, ResourceContent, ResourceDefinition};
pub use server::PrMcpServer;
pub use tools::{get_tool_definitions, ToolContent, ToolDefinition, ToolResult};
