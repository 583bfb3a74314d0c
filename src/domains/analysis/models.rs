//! Request and response bodies of the analysis API.
//!
//! Response models are deliberately lenient: fields the tools render with a
//! placeholder are optional, and a value of an unexpected JSON type is
//! treated as absent rather than failing the whole decode.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Requests
// ============================================================================

/// Body of a single-URL analysis submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    /// Company website to analyze.
    pub url: String,

    /// Optional context to focus the analysis. Never sent as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_context: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Acknowledgement returned when an analysis job is queued.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSubmission {
    #[serde(deserialize_with = "text")]
    pub job_id: String,
    #[serde(deserialize_with = "text")]
    pub status: String,
    #[serde(deserialize_with = "text")]
    pub created_at: String,
}

/// State of an analysis job.
///
/// The service does not send a reliable state flag, so the variant is chosen
/// by shape: a document carrying a `gtm_context` record is a finished job,
/// anything else is still in flight.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JobResult {
    Completed(CompletedJob),
    InProgress(JobProgress),
}

/// A finished job with its analysis record.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletedJob {
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    pub gtm_context: GtmContext,
}

/// GTM intelligence extracted from a company website.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GtmContext {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tldr: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub business_model: Option<BusinessModel>,
    #[serde(default = "empty_array")]
    pub products_services: Value,
    #[serde(default = "empty_object")]
    pub gtm_intelligence: Value,
    #[serde(default = "empty_object")]
    pub contact: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessModel {
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub target_market: Option<String>,
}

/// A job that is queued or being processed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobProgress {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub current_stage: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub started_at: Option<String>,
}

/// The authenticated user.
///
/// The credit balance is kept as the service's own rendering of the number.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub credits_remaining: String,
    pub is_active: bool,
}

/// System health, queue depth and the caller's account summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<SystemInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<AccountSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub queue: Option<QueueInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_jobs: Option<JobCounts>,
}

/// Counters are kept as display text so non-integer values survive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message_count: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub consumer_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobCounts {
    #[serde(default, deserialize_with = "lenient_text")]
    pub completed: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub processing: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub queued: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub credits_remaining: Option<String>,
}

// ============================================================================
// Field helpers
// ============================================================================

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Render a JSON scalar as display text; strings are taken verbatim.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Required field rendered as text, whatever its JSON type.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

/// Optional field rendered as text; null is treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()).map(value_to_text))
}

/// Optional field of type `T`; a value that does not fit `T` is dropped.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_focus_context() {
        let request = AnalysisRequest {
            url: "https://x.test".to_string(),
            focus_context: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "url": "https://x.test" }));
    }

    #[test]
    fn test_request_includes_focus_context() {
        let request = AnalysisRequest {
            url: "https://x.test".to_string(),
            focus_context: Some("pricing".to_string()),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["focus_context"], "pricing");
    }

    #[test]
    fn test_job_with_gtm_context_is_completed() {
        let job: JobResult = serde_json::from_value(json!({
            "job_id": "J1",
            "status": "completed",
            "url": "https://x.test",
            "gtm_context": { "company_name": "Acme" }
        }))
        .unwrap();

        match job {
            JobResult::Completed(done) => {
                assert_eq!(done.url.as_deref(), Some("https://x.test"));
                assert_eq!(done.gtm_context.company_name.as_deref(), Some("Acme"));
                assert!(done.gtm_context.tldr.is_none());
                assert_eq!(done.gtm_context.products_services, json!([]));
                assert_eq!(done.gtm_context.contact, json!({}));
            }
            JobResult::InProgress(_) => panic!("Expected completed job"),
        }
    }

    #[test]
    fn test_job_without_gtm_context_is_in_progress() {
        // A "completed" status alone does not make a finished job.
        let job: JobResult = serde_json::from_value(json!({
            "job_id": "J2",
            "status": "completed",
            "current_stage": "extracting"
        }))
        .unwrap();

        match job {
            JobResult::InProgress(progress) => {
                assert_eq!(progress.status.as_deref(), Some("completed"));
                assert_eq!(progress.current_stage.as_deref(), Some("extracting"));
                assert!(progress.started_at.is_none());
            }
            JobResult::Completed(_) => panic!("Expected in-progress job"),
        }
    }

    #[test]
    fn test_null_gtm_context_falls_back_to_in_progress() {
        let job: JobResult = serde_json::from_value(json!({
            "status": "processing",
            "gtm_context": null
        }))
        .unwrap();
        assert!(matches!(job, JobResult::InProgress(_)));
    }

    #[test]
    fn test_mistyped_business_model_is_dropped() {
        let context: GtmContext = serde_json::from_value(json!({
            "company_name": "Acme",
            "business_model": "B2B"
        }))
        .unwrap();
        assert!(context.business_model.is_none());
    }

    #[test]
    fn test_business_model_type_field() {
        let context: GtmContext = serde_json::from_value(json!({
            "business_model": { "type": "SaaS", "target_market": null }
        }))
        .unwrap();
        let model = context.business_model.unwrap();
        assert_eq!(model.kind.as_deref(), Some("SaaS"));
        assert!(model.target_market.is_none());
    }

    #[test]
    fn test_system_status_tolerates_missing_sections() {
        let status: SystemStatus = serde_json::from_value(json!({})).unwrap();
        assert!(status.system.is_none());
        assert!(status.user.is_none());

        let status: SystemStatus =
            serde_json::from_value(json!({ "system": null, "user": { "credits_remaining": 7 } }))
                .unwrap();
        assert!(status.system.is_none());
        assert_eq!(status.user.unwrap().credits_remaining.as_deref(), Some("7"));
    }

    #[test]
    fn test_submission_accepts_numeric_timestamp() {
        let submission: JobSubmission = serde_json::from_value(json!({
            "job_id": "J1",
            "status": "queued",
            "created_at": 1700000000
        }))
        .unwrap();
        assert_eq!(submission.created_at, "1700000000");
    }

    #[test]
    fn test_non_integer_counters_are_kept() {
        let status: SystemStatus = serde_json::from_value(json!({
            "system": { "queue": { "message_count": 4.0, "consumer_count": 2 } },
            "user": { "credits_remaining": 12.5 }
        }))
        .unwrap();
        let queue = status.system.unwrap().queue.unwrap();
        assert_eq!(queue.message_count.as_deref(), Some("4.0"));
        assert_eq!(queue.consumer_count.as_deref(), Some("2"));
        assert_eq!(status.user.unwrap().credits_remaining.as_deref(), Some("12.5"));
    }

    #[test]
    fn test_user_info_fractional_credits() {
        let user: UserInfo = serde_json::from_value(json!({
            "email": "a@b.test",
            "credits_remaining": 12.5,
            "is_active": true
        }))
        .unwrap();
        assert_eq!(user.credits_remaining, "12.5");
    }

    #[test]
    fn test_user_info_requires_fields() {
        let result: Result<UserInfo, _> =
            serde_json::from_value(json!({ "email": "a@b.test", "is_active": true }));
        assert!(result.is_err());
    }
}
