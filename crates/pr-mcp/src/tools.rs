//! MCP Tool definitions
//!
//! The three tools the server offers for PR preparation:
//!
//! - `analyze_file_changes` - Diff, statistics, and commits against a base branch
//! - `get_pr_templates` - List the registered PR templates with content
//! - `suggest_template` - Pick the best template for a described change

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "analyze_file_changes".to_string(),
            description: "Get the full diff and list of changed files in the current git repository."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "base_branch": {
                        "type": "string",
                        "description": "Base branch to compare against (default: main)"
                    },
                    "include_diff": {
                        "type": "boolean",
                        "description": "Include the full diff content (default: true)"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_pr_templates".to_string(),
            description: "List available PR templates with their content.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "suggest_template".to_string(),
            description: "Let Claude analyze the changes and suggest the most appropriate PR template."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "changes_summary": {
                        "type": "string",
                        "description": "Your analysis of what the changes do"
                    },
                    "change_type": {
                        "type": "string",
                        "description": "The type of change you've identified (bug, feature, docs, refactor, test, etc.)"
                    }
                },
                "required": ["changes_summary", "change_type"]
            }),
        },
    ]
}
