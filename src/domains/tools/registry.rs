//! Tool Registry - the tool catalog and dispatch by name.
//!
//! This module provides:
//! - The fixed, ordered catalog of tools (`get_all_tools`)
//! - Dispatch of a tool call to its handler (`call_tool`)
//!
//! `call_tool` always produces exactly one `CallToolResult`. Handler
//! failures are rendered as error-tagged text; an unknown name is answered
//! with a plain text notice.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{error, info, instrument, warn};

use super::definitions::{
    AnalyzeCompanyTool, GetJobResultTool, GetSystemStatusTool, GetUserInfoTool,
};
use super::handlers::{ToolHandler, error_result, success_result};
use crate::domains::analysis::AnalysisApi;

/// Prefix of every failed tool result.
pub const EXECUTION_ERROR_PREFIX: &str = "Tool execution error: ";

/// All tools, in catalog order.
const TOOLS: &[&dyn ToolHandler] = &[
    &AnalyzeCompanyTool,
    &GetJobResultTool,
    &GetUserInfoTool,
    &GetSystemStatusTool,
];

/// Tool registry - catalog plus dispatch against an analysis API.
pub struct ToolRegistry {
    api: Arc<dyn AnalysisApi>,
}

impl ToolRegistry {
    /// Create a registry that executes tools against `api`.
    pub fn new(api: Arc<dyn AnalysisApi>) -> Self {
        Self { api }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names() -> Vec<&'static str> {
        TOOLS.iter().map(|tool| tool.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the tool catalog; every
    /// transport lists tools through it.
    pub fn get_all_tools() -> Vec<Tool> {
        TOOLS.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Look up a tool by exact, case-sensitive name.
    fn find(name: &str) -> Option<&'static dyn ToolHandler> {
        TOOLS.iter().copied().find(|tool| tool.name() == name)
    }

    /// Execute a tool by name.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let Some(tool) = Self::find(name) else {
            warn!("Unknown tool requested: {}", name);
            return success_result(format!("Unknown tool: {name}"));
        };

        info!(
            "Executing tool: {} with arguments: {}",
            name,
            serde_json::Value::Object(arguments.clone())
        );

        match tool.execute(self.api.as_ref(), arguments).await {
            Ok(text) => success_result(text),
            Err(e) => {
                error!("Error executing tool {}: {}", name, e);
                error_result(format!("{EXECUTION_ERROR_PREFIX}{e}"))
            }
        }
    }
}
