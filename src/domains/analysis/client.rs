//! Analysis API client.
//!
//! `AnalysisApi` is the seam between the tool layer and the remote service.
//! `HttpAnalysisClient` is the production implementation: one pooled
//! reqwest client, created at startup with the bearer credential attached to
//! every request, shared read-only by all tool calls.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::models::{AnalysisRequest, JobResult, JobSubmission, SystemStatus, UserInfo};
use crate::core::config::ApiConfig;

const SINGLE_ANALYSIS_PATH: &[&str] = &["api", "v1", "single"];
const USER_PATH: &[&str] = &["api", "v1", "user"];
const STATUS_PATH: &[&str] = &["api", "v1", "status"];

/// Upper bound on how much of a non-JSON error body ends up in a message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Operations offered by the remote analysis service.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Queue a single-URL analysis job.
    async fn submit_analysis(&self, request: &AnalysisRequest) -> ApiResult<JobSubmission>;

    /// Fetch the current state of a job.
    async fn fetch_job(&self, job_id: &str) -> ApiResult<JobResult>;

    /// Fetch the authenticated user.
    async fn fetch_current_user(&self) -> ApiResult<UserInfo>;

    /// Fetch system health and queue statistics.
    async fn fetch_system_status(&self) -> ApiResult<SystemStatus>;
}

/// reqwest-backed `AnalysisApi` implementation.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpAnalysisClient {
    /// Build the client from the API configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| ApiError::Client(format!("invalid API key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The configured service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let request = self.http.get(url.clone());
        self.execute(request, &url).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(url.clone()).json(body);
        self.execute(request, &url).await
    }

    /// Send one request and decode the JSON body of a 2xx response.
    ///
    /// The body is always read to the end so the connection goes back to
    /// the pool, including on error statuses.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> ApiResult<T> {
        debug!("Sending API request to {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(url.as_str(), e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_transport(url.as_str(), e))?;

        debug!("API response: {} ({} bytes)", status, bytes.len());

        if !status.is_success() {
            let message = error_message(status, &bytes);
            warn!("API returned {} for {}: {}", status, url, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::decode(format!("JSON parse error: {e}")))
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    #[instrument(skip_all, fields(url = %request.url))]
    async fn submit_analysis(&self, request: &AnalysisRequest) -> ApiResult<JobSubmission> {
        let url = self.endpoint(SINGLE_ANALYSIS_PATH)?;
        self.post_json(url, request).await
    }

    #[instrument(skip(self))]
    async fn fetch_job(&self, job_id: &str) -> ApiResult<JobResult> {
        let url = self.endpoint(&["api", "v1", "job", job_id])?;
        self.get_json(url).await
    }

    #[instrument(skip(self))]
    async fn fetch_current_user(&self) -> ApiResult<UserInfo> {
        let url = self.endpoint(USER_PATH)?;
        self.get_json(url).await
    }

    #[instrument(skip(self))]
    async fn fetch_system_status(&self) -> ApiResult<SystemStatus> {
        let url = self.endpoint(STATUS_PATH)?;
        self.get_json(url).await
    }
}

/// Extract a human-readable message from an error response body.
///
/// JSON bodies are searched for the usual `detail` / `message` / `error`
/// fields; anything else is reported as (truncated) text.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
        let field = ["detail", "message", "error"]
            .iter()
            .find_map(|key| json.get(*key).filter(|v| !v.is_null()));
        if let Some(value) = field {
            return match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        text.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }
}
