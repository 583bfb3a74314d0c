//! Tool definitions module.
//!
//! Each tool is defined in its own file and maps onto one analysis API
//! endpoint.

pub mod analyze_company;
pub mod get_job_result;
pub mod get_system_status;
pub mod get_user_info;

pub use analyze_company::{AnalyzeCompanyParams, AnalyzeCompanyTool};
pub use get_job_result::{GetJobResultParams, GetJobResultTool};
pub use get_system_status::{GetSystemStatusParams, GetSystemStatusTool};
pub use get_user_info::{GetUserInfoParams, GetUserInfoTool};
