//! Tool-specific error types.

use thiserror::Error;

use crate::domains::analysis::ApiError;

/// Errors that can occur while executing a tool.
///
/// These never escape the registry: they are rendered into an
/// error-tagged tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The arguments did not match the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The analysis API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
