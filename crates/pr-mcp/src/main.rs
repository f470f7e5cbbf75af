//! PR preparation MCP Server
//!
//! A Model Context Protocol server that helps agentic clients prepare
//! pull requests: analyzing branch changes, serving the team's PR
//! templates and guidelines, and suggesting the right template.
//!
//! # Usage
//!
//! ```bash
//! pr-mcp [--repo <path>] [--templates-dir <path>] [--guidelines-dir <path>]
//! ```
//!
//! Relative `--templates-dir` and `--guidelines-dir` values resolve
//! against `--repo`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `pr_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use pr_mcp::{PrMcpServer, ServerPaths};

/// MCP server for PR preparation
#[derive(Parser)]
#[command(name = "pr-mcp")]
#[command(about = "MCP server exposing PR analysis tools and team review context")]
#[command(version)]
struct Args {
    /// Working repository the git queries run in
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    /// Directory holding the registered PR templates
    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,

    /// Directory holding team guideline documents
    #[arg(long, default_value = "team-guidelines")]
    guidelines_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pr_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let paths = ServerPaths::resolve(args.repo, args.templates_dir, args.guidelines_dir);

    tracing::info!(repo = ?paths.repo, "Starting pr-mcp server");

    let mut server = PrMcpServer::new(paths);
    server.run().await?;

    Ok(())
}
