//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Environment variable holding the analysis API base URL.
pub const API_URL_VAR: &str = "LLMS_TXT_API_URL";

/// Environment variable holding the analysis API bearer key.
pub const API_KEY_VAR: &str = "LLMS_TXT_API_KEY";

/// Environment variable overriding the per-request timeout in seconds.
pub const API_TIMEOUT_VAR: &str = "LLMS_TXT_API_TIMEOUT_SECS";

/// Base URL used when `LLMS_TXT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote analysis API connection settings.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the remote analysis API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service, e.g. `http://localhost:8000`.
    pub base_url: String,

    /// Bearer credential sent with every request.
    pub api_key: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Create API settings with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the API settings from the environment.
    ///
    /// The key is mandatory; there is no sensible fallback for it.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{API_KEY_VAR} environment variable is required")))?;

        let base_url = std::env::var(API_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match std::env::var(API_TIMEOUT_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::config(format!("{API_TIMEOUT_VAR} must be a positive integer, got '{raw}'"))
                })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "llms-txt-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with default server settings and the given API
    /// connection.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            api,
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Server variables are prefixed with `MCP_` (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). The analysis API is configured
    /// through `LLMS_TXT_API_URL`, `LLMS_TXT_API_KEY` and
    /// `LLMS_TXT_API_TIMEOUT_SECS`. A missing API key is an error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(ApiConfig::from_env()?);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}
