//! Core module containing shared infrastructure components.
//!
//! Configuration, the top-level error type, the MCP server handler and the
//! transport layer live here; nothing in `core` knows how a tool renders its
//! output.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
