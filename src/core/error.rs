//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for server startup failures.
//! Per-call tool failures never reach it: they are rendered into the tool
//! result instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The analysis API client could not be set up.
    #[error("Analysis API error: {0}")]
    Api(#[from] crate::domains::analysis::ApiError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
