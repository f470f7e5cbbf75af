//! MCP Resource definitions
//!
//! Fixed descriptors for the resources the server enumerates, plus the
//! content envelope returned by reads. Template and guideline files are
//! addressed through parameterized `file://` URIs. The seven registered
//! template files are enumerated; guideline files are readable by exact
//! URI but intentionally not listed, so the guideline directory stays
//! free-form.

use serde::{Deserialize, Serialize};

use pr_review::TEMPLATE_REGISTRY;

/// URI prefix for registered template files
pub const TEMPLATE_URI_PREFIX: &str = "file://templates/";

/// URI prefix for team guideline documents
pub const GUIDELINE_URI_PREFIX: &str = "file://team-guidelines/";

/// URI of the recent commit history resource
pub const RECENT_CHANGES_URI: &str = "git://recent-changes";

/// URI of the static review-process policy resource
pub const REVIEW_PROCESS_URI: &str = "team://review-process";

/// Resource definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// Content returned from a resource read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Get all statically known resource definitions
pub fn get_resource_definitions() -> Vec<ResourceDefinition> {
    let mut resources = vec![
        ResourceDefinition {
            uri: RECENT_CHANGES_URI.to_string(),
            name: "Recent changes".to_string(),
            description: "Recent commit history to understand project patterns".to_string(),
            mime_type: "application/json".to_string(),
        },
        ResourceDefinition {
            uri: REVIEW_PROCESS_URI.to_string(),
            name: "Review process".to_string(),
            description: "Team-specific review process and requirements".to_string(),
            mime_type: "application/json".to_string(),
        },
    ];

    for (filename, label) in TEMPLATE_REGISTRY {
        resources.push(ResourceDefinition {
            uri: format!("{TEMPLATE_URI_PREFIX}{filename}"),
            name: format!("{label} PR template"),
            description: format!("PR template for {label} changes"),
            mime_type: "text/markdown".to_string(),
        });
    }

    resources
}
