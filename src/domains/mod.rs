//! Domains module containing business logic organized by bounded contexts.
//!
//! - `analysis`: typed client for the remote company-analysis HTTP API
//! - `tools`: the MCP tools exposed to clients, rendered as plain text

pub mod analysis;
pub mod tools;
