//! LLMS-TXT-API MCP Server Library
//!
//! This crate exposes a remote company-analysis HTTP service ("LLMS-TXT-API")
//! to MCP clients as four tools:
//!
//! - `analyze_company`: submit a website for go-to-market analysis
//! - `get_job_result`: poll a job and render the finished report
//! - `get_user_info`: show the account behind the API key
//! - `get_system_status`: show queue and job counters
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **analysis**: the HTTP client and its response models
//!   - **tools**: tool definitions, the registry and text rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use llms_txt_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::from_config(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
