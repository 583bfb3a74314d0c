//! Tools domain module.
//!
//! This module exposes the analysis API as MCP tools. Each tool validates
//! its arguments, makes exactly one API call and renders the response as
//! text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - `ToolHandler` trait and result helpers
//! - `registry.rs` - Tool catalog and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define the params struct and implement `ToolHandler`
//! 3. Export it in `definitions/mod.rs`
//! 4. Append it to `TOOLS` in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::{ToolHandler, error_result, parse_params, success_result};
pub use registry::{EXECUTION_ERROR_PREFIX, ToolRegistry};
