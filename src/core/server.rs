//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! `ToolRegistry`.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool,
//! each implementing `ToolHandler`. The registry owns the catalog and
//! dispatches calls by name, so unknown names still produce a regular tool
//! result instead of a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error;
use crate::domains::analysis::{AnalysisApi, HttpAnalysisClient};
use crate::domains::tools::ToolRegistry;

/// Instructions advertised to MCP clients.
const INSTRUCTIONS: &str = "GTM intelligence analysis tools backed by LLMS-TXT-API. \
    Submit a company website with analyze_company, then poll get_job_result with the \
    returned job_id. get_user_info and get_system_status report credits and service health.";

/// The main MCP server handler.
///
/// Cloning is cheap; every clone shares the same registry and API client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog and dispatcher.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server that executes tools against `api`.
    pub fn new(config: Config, api: Arc<dyn AnalysisApi>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(api)),
        }
    }

    /// Create a server backed by an HTTP client for `config.api`.
    pub fn from_config(config: Config) -> error::Result<Self> {
        let client = HttpAnalysisClient::new(&config.api)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Instructions string sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Tool catalog as JSON (for HTTP transport).
    pub fn tool_catalog(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Execute a tool by name.
    ///
    /// Always returns exactly one result; failures are carried inside it.
    pub async fn execute_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        self.registry.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.execute_tool(&request.name, arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::core::config::ApiConfig;
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(base_url: &str) -> McpServer {
        let api = ApiConfig::new(base_url, "test-key");
        let client = HttpAnalysisClient::new(&api).unwrap();
        McpServer::new(Config::new(api), Arc::new(client))
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_server_info() {
        let server = server_for("http://localhost:8000");
        let info = server.get_info();
        assert_eq!(info.server_info.name, "llms-txt-api");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("get_job_result"));
    }

    #[test]
    fn test_from_config_rejects_bad_base_url() {
        let config = Config::new(ApiConfig::new("not a url", "test-key"));
        let err = McpServer::from_config(config).err().unwrap();
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn test_tool_catalog_json() {
        let server = server_for("http://localhost:8000");
        let tools = server.tool_catalog();
        assert_eq!(tools.len(), 4);
        assert_eq!(tools[0]["name"], "analyze_company");
        assert!(tools[0]["inputSchema"]["properties"]["url"].is_object());
    }

    #[tokio::test]
    async fn test_end_to_end_analyze_company() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/single"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job_id": "J1",
                "status": "queued",
                "created_at": "T0"
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let args = json!({ "url": "https://x.test" }).as_object().cloned().unwrap();
        let result = server.execute_tool("analyze_company", args).await;

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.contains("Job ID: J1"));
        assert!(text.contains("Status: queued"));
        assert!(text.contains("Created: T0"));
    }

    #[tokio::test]
    async fn test_end_to_end_http_error_status() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/job/J404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Job not found" })))
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let args = json!({ "job_id": "J404" }).as_object().cloned().unwrap();
        let result = server.execute_tool("get_job_result", args).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Tool execution error: API error (404): Job not found"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_error_result() {
        // Nothing listens on the discard port.
        let server = server_for("http://127.0.0.1:9");
        for name in ["get_user_info", "get_system_status"] {
            let result = server.execute_tool(name, JsonObject::new()).await;
            assert_eq!(result.is_error, Some(true));
            assert_eq!(result.content.len(), 1);
            assert!(text_of(&result).starts_with("Tool execution error: "));
        }
    }
}
