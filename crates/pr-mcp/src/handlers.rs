//! MCP Tool Handlers
//!
//! This module implements the handlers for MCP tool calls, delegating to
//! pr-git for repository inspection and pr-review for template logic.
//!
//! Note: Handler functions use `async fn` for consistency with the MCP server's
//! tokio runtime, even though the current implementations perform synchronous I/O.
//! This allows for future migration to async subprocess handling without API changes.

use serde::Deserialize;
use serde_json::Value;

use pr_git::analyze_file_changes;
use pr_review::suggest;

use crate::context::ServerContext;
use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
///
/// Returns the tool's final text payload. Git failures inside
/// `analyze_file_changes` come back as `Ok` text describing the failure;
/// unknown tools, bad arguments, and template store failures are `Err`
/// and surface to the client as MCP tool errors.
pub async fn handle_tool_call(
    ctx: &ServerContext,
    tool_name: &str,
    arguments: Value,
) -> Result<String> {
    match tool_name {
        "analyze_file_changes" => handle_analyze_file_changes(ctx, arguments).await,
        "get_pr_templates" => handle_get_pr_templates(ctx).await,
        "suggest_template" => handle_suggest_template(ctx, arguments).await,

        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Deserialize tool arguments, treating absent arguments as an empty
/// object so field defaults apply.
fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T> {
    let value = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(value).map_err(|e| Error::InvalidArgument(e.to_string()))
}

// ============================================================================
// analyze_file_changes
// ============================================================================

/// Arguments for analyze_file_changes
#[derive(Debug, Deserialize)]
struct AnalyzeFileChangesArgs {
    #[serde(default = "default_base_branch")]
    base_branch: String,
    #[serde(default = "default_include_diff")]
    include_diff: bool,
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_include_diff() -> bool {
    true
}

/// Handle analyze_file_changes - diff and changed files against a base branch
///
/// A failed comparison (unknown base branch, not a repository) is not a
/// request failure: the git stderr is embedded in the returned text so
/// the caller can see exactly what git said.
async fn handle_analyze_file_changes(ctx: &ServerContext, arguments: Value) -> Result<String> {
    let args: AnalyzeFileChangesArgs = parse_args(arguments)?;

    match analyze_file_changes(ctx.git(), &args.base_branch, args.include_diff) {
        Ok(analysis) => Ok(serde_json::to_string_pretty(&analysis)?),
        Err(pr_git::Error::CommandFailed { stderr }) => {
            Ok(format!("Error analyzing changes: {stderr}"))
        }
        Err(e) => Ok(format!("Error: {e}")),
    }
}

// ============================================================================
// get_pr_templates
// ============================================================================

/// Handle get_pr_templates - list the registered templates with content
async fn handle_get_pr_templates(ctx: &ServerContext) -> Result<String> {
    let templates = ctx.templates().list()?;
    Ok(serde_json::to_string_pretty(&templates)?)
}

// ============================================================================
// suggest_template
// ============================================================================

/// Arguments for suggest_template
#[derive(Debug, Deserialize)]
struct SuggestTemplateArgs {
    changes_summary: String,
    change_type: String,
}

/// Handle suggest_template - pick the best template for a described change
async fn handle_suggest_template(ctx: &ServerContext, arguments: Value) -> Result<String> {
    let args: SuggestTemplateArgs = parse_args(arguments)?;

    let templates = ctx.templates().list()?;
    let suggestion = suggest(&templates, &args.changes_summary, &args.change_type)
        .ok_or_else(|| Error::InvalidArgument("no templates available".to_string()))?;

    Ok(serde_json::to_string_pretty(&suggestion)?)
}
