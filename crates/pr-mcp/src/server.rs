//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling
//! with git inspection and the review document stores.

use std::io::{BufRead, Write};

use serde_json::{json, Value};

use crate::context::{ServerContext, ServerPaths};
use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ReadResourceParams, ResourcesCapability,
    ServerCapabilities, ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::resource_handlers::read_resource;
use crate::resources::{get_resource_definitions, ResourceDefinition};
use crate::tools::{get_tool_definitions, ToolDefinition, ToolResult};
use crate::{Error, Result};

/// MCP Server for PR preparation
///
/// Exposes change analysis, PR templates, and team review context over
/// the Model Context Protocol so agentic clients can prepare pull
/// requests against the working repository.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use pr_mcp::{PrMcpServer, ServerPaths};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let paths = ServerPaths::resolve(
///         PathBuf::from("."),
///         PathBuf::from("templates"),
///         PathBuf::from("team-guidelines"),
///     );
///     let mut server = PrMcpServer::new(paths);
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct PrMcpServer {
    /// Resolved filesystem configuration
    paths: ServerPaths,

    /// Git runner and document stores shared by all handlers
    ctx: ServerContext,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,

    /// Available MCP resources
    resources: Vec<ResourceDefinition>,
}

impl PrMcpServer {
    /// Create a new MCP server instance over the given paths
    pub fn new(paths: ServerPaths) -> Self {
        Self {
            ctx: ServerContext::new(&paths),
            paths,
            initialized: false,
            tools: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Initialize the server
    ///
    /// Loads tool and resource definitions and marks the server ready.
    pub async fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            repo = ?self.paths.repo,
            templates = ?self.paths.templates_dir,
            guidelines = ?self.paths.guidelines_dir,
            "Initializing MCP server"
        );

        self.tools = get_tool_definitions();
        self.resources = get_resource_definitions();

        self.initialized = true;
        Ok(())
    }

    /// Run the MCP server
    ///
    /// This starts the server and begins processing MCP protocol
    /// messages over stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        self.initialize().await?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Parses the JSON-RPC request and dispatches to the appropriate handler.
    ///
    /// # Returns
    ///
    /// The JSON-RPC response as a string, or empty string for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id).await?,
            "initialized" => return Ok(String::new()), // Notification, no response
            "notifications/initialized" => return Ok(String::new()), // Notification, no response
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id).await?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            "resources/list" => self.handle_resources_list(request.id).await?,
            "resources/read" => self.handle_resources_read(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request
    ///
    /// Returns server capabilities and info.
    async fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "pr-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    async fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let tools = get_tool_definitions();

        // Convert to the format expected by MCP protocol
        let tools_value: Vec<Value> = tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        Ok(JsonRpcResponse::success(id, json!({ "tools": tools_value })))
    }

    /// Handle tools/call request
    ///
    /// Executes the requested tool and returns the result. Handler
    /// failures become successful responses carrying `is_error: true`;
    /// only transport problems become JSON-RPC errors.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(&self.ctx, &tool_params.name, tool_params.arguments).await {
            Ok(text) => {
                let tool_result = ToolResult::text(text);
                Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
            }
            Err(e) => {
                let tool_result = ToolResult::error(format!("{}", e));
                Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
            }
        }
    }

    /// Handle resources/list request
    async fn handle_resources_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let resources = get_resource_definitions();

        // Convert to the format expected by MCP protocol
        let resources_value: Vec<Value> = resources
            .iter()
            .map(|r| {
                json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect();

        Ok(JsonRpcResponse::success(
            id,
            json!({ "resources": resources_value }),
        ))
    }

    /// Handle resources/read request
    async fn handle_resources_read(
        &self,
        id: Option<Value>,
        params: Value,
    ) -> Result<JsonRpcResponse> {
        let read_params: ReadResourceParams = serde_json::from_value(params)?;

        match read_resource(&self.ctx, &read_params.uri).await {
            Ok(content) => {
                let result = json!({
                    "contents": [{
                        "uri": content.uri,
                        "mimeType": content.mime_type,
                        "text": content.text
                    }]
                });
                Ok(JsonRpcResponse::success(id, result))
            }
            Err(e) => Ok(JsonRpcResponse::error(
                id,
                -32602,
                format!("Resource error: {}", e),
            )),
        }
    }

    /// Get the resolved path configuration
    pub fn paths(&self) -> &ServerPaths {
        &self.paths
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Get available resources
    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }
}
