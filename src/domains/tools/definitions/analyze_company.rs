//! Company analysis submission tool.
//!
//! Queues a GTM intelligence analysis of one company website. The job runs
//! asynchronously on the service; results are fetched with `get_job_result`.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::analysis::{AnalysisApi, AnalysisRequest, JobSubmission};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_params};

/// Parameters for the company analysis tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeCompanyParams {
    /// The company website URL to analyze
    #[schemars(extend("format" = "uri"))]
    pub url: String,

    /// Optional context to focus the analysis
    #[serde(default)]
    pub focus_context: Option<String>,
}

impl AnalyzeCompanyParams {
    /// Build the submission body. An empty focus context is left out.
    fn into_request(self) -> Result<AnalysisRequest, ToolError> {
        if self.url.is_empty() {
            return Err(ToolError::invalid_arguments("'url' must not be empty"));
        }

        Ok(AnalysisRequest {
            url: self.url,
            focus_context: self.focus_context.filter(|ctx| !ctx.is_empty()),
        })
    }
}

/// Company analysis tool - submits a single-URL analysis job.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeCompanyTool;

impl AnalyzeCompanyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "analyze_company";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Analyze a single company website to extract GTM intelligence";

    /// Render the acknowledgement of a queued job.
    pub fn format_submission(submission: &JobSubmission) -> String {
        format!(
            "Company analysis started!\n\n\
             Job ID: {}\n\
             Status: {}\n\
             Created: {}\n\n\
             Use {} with this job_id to check progress and get results.",
            submission.job_id,
            submission.status,
            submission.created_at,
            super::GetJobResultTool::NAME,
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for AnalyzeCompanyTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AnalyzeCompanyParams>(),
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
        let request = parse_params::<AnalyzeCompanyParams>(arguments)?.into_request()?;
        info!(
            "Submitting analysis for {} (focus context: {})",
            request.url,
            request.focus_context.is_some()
        );

        let submission = api.submit_analysis(&request).await?;
        info!("Analysis job {} queued", submission.job_id);

        Ok(Self::format_submission(&submission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_submission() {
        let submission = JobSubmission {
            job_id: "J1".to_string(),
            status: "queued".to_string(),
            created_at: "T0".to_string(),
        };
        let text = AnalyzeCompanyTool::format_submission(&submission);
        assert_eq!(
            text,
            "Company analysis started!\n\nJob ID: J1\nStatus: queued\nCreated: T0\n\n\
             Use get_job_result with this job_id to check progress and get results."
        );
    }

    #[test]
    fn test_empty_focus_context_is_dropped() {
        let params: AnalyzeCompanyParams =
            serde_json::from_value(json!({ "url": "https://x.test", "focus_context": "" }))
                .unwrap();
        let request = params.into_request().unwrap();
        assert_eq!(request.focus_context, None);
    }

    #[test]
    fn test_arguments_forwarded_verbatim() {
        let params: AnalyzeCompanyParams = serde_json::from_value(
            json!({ "url": " https://x.test ", "focus_context": "  " }),
        )
        .unwrap();
        let request = params.into_request().unwrap();
        assert_eq!(request.url, " https://x.test ");
        assert_eq!(request.focus_context.as_deref(), Some("  "));
    }

    #[test]
    fn test_focus_context_is_kept() {
        let params: AnalyzeCompanyParams = serde_json::from_value(
            json!({ "url": "https://x.test", "focus_context": "enterprise sales" }),
        )
        .unwrap();
        let request = params.into_request().unwrap();
        assert_eq!(request.focus_context.as_deref(), Some("enterprise sales"));
    }

    #[test]
    fn test_empty_url_rejected() {
        let params: AnalyzeCompanyParams =
            serde_json::from_value(json!({ "url": "" })).unwrap();
        assert!(matches!(
            params.into_request(),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_schema_marks_url_required() {
        let tool = AnalyzeCompanyTool.to_tool();
        assert_eq!(tool.name, AnalyzeCompanyTool::NAME);

        let required = tool.input_schema.get("required").and_then(|v| v.as_array()).unwrap();
        assert!(required.contains(&json!("url")));
        assert!(!required.contains(&json!("focus_context")));

        let properties = tool.input_schema.get("properties").unwrap();
        assert_eq!(properties["url"]["format"], "uri");
        assert!(properties.get("focus_context").is_some());
    }
}
