//! Analysis API domain module.
//!
//! This module wraps the remote LLMS-TXT-API service, which performs the
//! actual GTM intelligence extraction. It is consumed purely as an HTTP JSON
//! API; nothing here knows about MCP.
//!
//! ## Architecture
//!
//! - `client.rs` - `AnalysisApi` trait and its reqwest-backed implementation
//! - `models.rs` - Typed request/response bodies
//! - `error.rs` - API-specific error types

mod client;
mod error;
pub mod models;

pub use client::{AnalysisApi, HttpAnalysisClient};
pub use error::{ApiError, ApiResult};
pub use models::{
    AnalysisRequest, CompletedJob, GtmContext, JobProgress, JobResult, JobSubmission,
    SystemStatus, UserInfo,
};
