//! MCP Resource Handlers
//!
//! Read-only views over the working repository and the configured
//! template and guideline directories.
//!
//! Note: Handler functions use `async fn` for consistency with the MCP server's
//! tokio runtime, even though the current implementations perform synchronous I/O.
//! This allows for future migration to async file operations without API changes.

use serde_json::json;
use tracing::warn;

use pr_review::ReviewProcess;

use crate::context::ServerContext;
use crate::resources::{
    ResourceContent, GUIDELINE_URI_PREFIX, RECENT_CHANGES_URI, REVIEW_PROCESS_URI,
    TEMPLATE_URI_PREFIX,
};
use crate::{Error, Result};

/// Read a resource by URI
///
/// Template and guideline URIs are matched by prefix; the remainder of
/// the URI is a filename inside the configured directory. An unknown
/// filename is not an error: the content is a human-readable "not found"
/// note so clients can browse freely.
///
/// # Errors
///
/// Returns `Error::UnknownResource` if the URI matches none of the
/// supported schemes.
pub async fn read_resource(ctx: &ServerContext, uri: &str) -> Result<ResourceContent> {
    if let Some(filename) = uri.strip_prefix(TEMPLATE_URI_PREFIX) {
        return read_template(ctx, uri, filename).await;
    }
    if let Some(filename) = uri.strip_prefix(GUIDELINE_URI_PREFIX) {
        return read_guideline(ctx, uri, filename).await;
    }
    match uri {
        RECENT_CHANGES_URI => read_recent_changes(ctx).await,
        REVIEW_PROCESS_URI => read_review_process().await,
        _ => Err(Error::UnknownResource(uri.to_string())),
    }
}

/// Read a single template file by name
async fn read_template(ctx: &ServerContext, uri: &str, filename: &str) -> Result<ResourceContent> {
    let text = match ctx.templates().read(filename)? {
        Some(content) => content,
        None => format!("Template {filename} not found"),
    };

    Ok(ResourceContent {
        uri: uri.to_string(),
        mime_type: "text/markdown".to_string(),
        text,
    })
}

/// Read a single guideline document by name
async fn read_guideline(ctx: &ServerContext, uri: &str, filename: &str) -> Result<ResourceContent> {
    let text = match ctx.guidelines().read(filename)? {
        Some(content) => content,
        None => format!("Guideline file {filename} not found"),
    };

    Ok(ResourceContent {
        uri: uri.to_string(),
        mime_type: "text/markdown".to_string(),
        text,
    })
}

/// Read recent commit history as JSON
///
/// A git failure is part of the payload rather than a request failure:
/// the resource always reads, and a broken repository shows up as a
/// compact `{"error": ...}` object.
async fn read_recent_changes(ctx: &ServerContext) -> Result<ResourceContent> {
    let text = match pr_git::recent_changes(ctx.git()) {
        Ok(changes) => serde_json::to_string_pretty(&changes)?,
        Err(pr_git::Error::CommandFailed { stderr }) => {
            warn!("git log failed: {}", stderr.trim());
            serde_json::to_string(&json!({ "error": format!("Git error: {stderr}") }))?
        }
        Err(e) => {
            warn!("recent-changes query failed: {}", e);
            serde_json::to_string(&json!({ "error": e.to_string() }))?
        }
    };

    Ok(ResourceContent {
        uri: RECENT_CHANGES_URI.to_string(),
        mime_type: "application/json".to_string(),
        text,
    })
}

/// Serialize the static review-process policy
async fn read_review_process() -> Result<ResourceContent> {
    let text = serde_json::to_string_pretty(&ReviewProcess::standard())?;

    Ok(ResourceContent {
        uri: REVIEW_PROCESS_URI.to_string(),
        mime_type: "application/json".to_string(),
        text,
    })
}
