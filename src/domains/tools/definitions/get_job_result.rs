//! Job result retrieval tool.
//!
//! Fetches one analysis job and renders either the finished GTM report or
//! the job's current progress, depending on which shape the service sent.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::analysis::{AnalysisApi, CompletedJob, JobProgress, JobResult};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_params, pretty_json};

const UNKNOWN: &str = "Unknown";
const NO_SUMMARY: &str = "No summary available";

/// Parameters for the job result tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetJobResultParams {
    /// The job ID to retrieve results for
    pub job_id: String,
}

/// Job result tool - reports progress or the completed analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetJobResultTool;

impl GetJobResultTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_job_result";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieve analysis results for a job";

    /// Render a job in whichever state the service reported.
    pub fn format_job(job_id: &str, job: &JobResult) -> String {
        match job {
            JobResult::Completed(done) => Self::format_report(done),
            JobResult::InProgress(progress) => Self::format_progress(job_id, progress),
        }
    }

    /// Render the multi-section GTM report of a finished job.
    pub fn format_report(job: &CompletedJob) -> String {
        let gtm = &job.gtm_context;
        let model = gtm.business_model.clone().unwrap_or_default();

        format!(
            "# GTM Analysis Complete for {url}\n\n\
             ## Company: {company}\n\n\
             ### Summary\n{summary}\n\n\
             ### Business Model\n\
             - Type: {kind}\n\
             - Target Market: {market}\n\n\
             ### Products & Services\n{products}\n\n\
             ### GTM Intelligence\n{intelligence}\n\n\
             ### Contact Information\n{contact}\n",
            url = job.url.as_deref().unwrap_or(UNKNOWN),
            company = gtm.company_name.as_deref().unwrap_or(UNKNOWN),
            summary = gtm.tldr.as_deref().unwrap_or(NO_SUMMARY),
            kind = model.kind.as_deref().unwrap_or(UNKNOWN),
            market = model.target_market.as_deref().unwrap_or(UNKNOWN),
            products = pretty_json(&gtm.products_services),
            intelligence = pretty_json(&gtm.gtm_intelligence),
            contact = pretty_json(&gtm.contact),
        )
    }

    /// Render the status of a job that has not finished yet.
    pub fn format_progress(job_id: &str, progress: &JobProgress) -> String {
        format!(
            "Job {} Status: {}\nCurrent Stage: {}\nStarted: {}",
            job_id,
            progress.status.as_deref().unwrap_or("unknown"),
            progress.current_stage.as_deref().unwrap_or("unknown"),
            progress.started_at.as_deref().unwrap_or("not started"),
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetJobResultTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetJobResultParams>(),
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
        let params = parse_params::<GetJobResultParams>(arguments)?;
        let job_id = params.job_id.as_str();
        if job_id.is_empty() {
            return Err(ToolError::invalid_arguments("'job_id' must not be empty"));
        }

        let job = api.fetch_job(job_id).await?;
        match &job {
            JobResult::Completed(_) => info!("Job {} completed", job_id),
            JobResult::InProgress(p) => info!(
                "Job {} still in progress ({})",
                job_id,
                p.status.as_deref().unwrap_or("unknown")
            ),
        }

        Ok(Self::format_job(job_id, &job))
    }
}
