//! Current user lookup tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::analysis::{AnalysisApi, UserInfo};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_params};

/// The user tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetUserInfoParams {}

/// User info tool - shows the authenticated account and its credits.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetUserInfoTool;

impl GetUserInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_user_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current user information and credits";

    /// Render the account summary.
    pub fn format_user(user: &UserInfo) -> String {
        format!(
            "User Information:\nEmail: {}\nCredits Remaining: {}\nAccount Active: {}",
            user.email, user.credits_remaining, user.is_active
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetUserInfoTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetUserInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn execute(
        &self,
        api: &dyn AnalysisApi,
        arguments: JsonObject,
    ) -> Result<String, ToolError> {
        parse_params::<GetUserInfoParams>(arguments)?;
        let user = api.fetch_current_user().await?;
        Ok(Self::format_user(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_user() {
        let user = UserInfo {
            email: "ops@acme.test".to_string(),
            credits_remaining: "42".to_string(),
            is_active: true,
        };
        assert_eq!(
            GetUserInfoTool::format_user(&user),
            "User Information:\nEmail: ops@acme.test\nCredits Remaining: 42\nAccount Active: true"
        );
    }

    #[test]
    fn test_format_user_fractional_credits() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "email": "ops@acme.test",
            "credits_remaining": 12.5,
            "is_active": false
        }))
        .unwrap();
        assert!(GetUserInfoTool::format_user(&user).contains("Credits Remaining: 12.5\n"));
    }

    #[test]
    fn test_schema_has_no_required_fields() {
        let tool = GetUserInfoTool.to_tool();
        assert_eq!(tool.input_schema.get("type").and_then(|v| v.as_str()), Some("object"));
        let required = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|r| r.len())
            .unwrap_or(0);
        assert_eq!(required, 0);
    }
}
