//! System status tool.
//!
//! Reports service health, queue depth, job counters and the caller's
//! remaining credits. Either half of the response (`system` / `user`) may
//! be missing; every value then falls back to `unknown` or 0.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::analysis::{AnalysisApi, SystemStatus};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_params};

/// The status tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetSystemStatusParams {}

/// System status tool - health and queue overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSystemStatusTool;

impl GetSystemStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_system_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check system health and queue status";

    /// Render the status report.
    ///
    /// Counters print as the service sent them; absent ones print as 0.
    pub fn format_status(status: &SystemStatus) -> String {
        let system = status.system.clone().unwrap_or_default();
        let queue = system.queue.unwrap_or_default();
        let jobs = system.total_jobs.unwrap_or_default();
        let credits = status
            .user
            .as_ref()
            .and_then(|u| u.credits_remaining.as_deref());

        format!(
            "System Status: {}\n\n\
             Queue Information:\n\
             - Messages in Queue: {}\n\
             - Active Workers: {}\n\n\
             Job Statistics:\n\
             - Completed: {}\n\
             - Processing: {}\n\
             - Queued: {}\n\n\
             Your Account:\n\
             - Credits Remaining: {}\n",
            system.status.as_deref().unwrap_or("unknown"),
            count(queue.message_count.as_deref()),
            count(queue.consumer_count.as_deref()),
            count(jobs.completed.as_deref()),
            count(jobs.processing.as_deref()),
            count(jobs.queued.as_deref()),
            count(credits),
        )
    }
}

fn count(value: Option<&str>) -> &str {
    value.unwrap_or("0")
}

#[async_trait::async_trait]
impl ToolHandler for GetSystemStatusTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSystemStatusParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn execute(
        &self,
        api: &dyn AnalysisApi,
        arguments: JsonObject,
    ) -> Result<String, ToolError> {
        parse_params::<GetSystemStatusParams>(arguments)?;
        let status = api.fetch_system_status().await?;
        Ok(Self::format_status(&status))
    }
}
