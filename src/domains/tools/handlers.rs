//! Tool handler trait and result helpers.
//!
//! Every tool implements `ToolHandler`. A handler produces the success text
//! or a `ToolError`; turning that into a `CallToolResult` is the registry's
//! job, so the rendering of failures stays uniform across tools.

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde::de::DeserializeOwned;

use super::error::ToolError;
use crate::domains::analysis::AnalysisApi;

/// Trait implemented by every tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name of this tool as registered in MCP.
    fn name(&self) -> &'static str;

    /// Tool descriptor (name, description, input schema).
    fn to_tool(&self) -> Tool;

    /// Execute the tool against the analysis API.
    ///
    /// Implementations make at most one API call.
    async fn execute(
        &self,
        api: &dyn AnalysisApi,
        arguments: JsonObject,
    ) -> Result<String, ToolError>;
}

/// Decode raw tool arguments into the tool's parameter struct.
///
/// Missing required fields and mistyped values are reported as
/// `ToolError::InvalidArguments`; unknown fields are ignored.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create an error result with text content.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Pretty-print a JSON value with two-space indentation.
pub(crate) fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
