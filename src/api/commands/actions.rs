//! Command palette module
//!
//! Lists the commands contributed by all features and executes palette
//! actions against them.

use crate::core::features::assistant_client::GeminiClient;
use crate::core::features::{execute_feature_action, get_all_command_items, FeatureContext};
use crate::shared::error::AppResult;
use crate::shared::types::{CommandItem, ExecuteActionRequest, ExecuteActionResponse};

/// Get all commands from all features
pub async fn list_commands() -> AppResult<Vec<CommandItem>> {
    Ok(get_all_command_items())
}

/// Execute a palette action
pub async fn execute_action(
    client: &GeminiClient,
    request: ExecuteActionRequest,
) -> AppResult<ExecuteActionResponse> {
    let ctx = FeatureContext { assistant: client };
    execute_feature_action(&ctx, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AppError;
    use crate::shared::settings::AssistantConfig;
    use crate::shared::types::ActionType;

    #[tokio::test]
    async fn test_execute_convert_action() {
        let client = GeminiClient::new(AssistantConfig::default());
        let request = ExecuteActionRequest {
            action_type: ActionType::ConvertUnit {
                target: "Kilometers".to_string(),
            },
            params: serde_json::json!({"text": "100 m"}),
        };
        let response = execute_action(&client, request).await.unwrap();
        assert_eq!(response.result, "0.1 Kilometers");

        let metadata = response.metadata.unwrap();
        assert_eq!(metadata["category"], "Length");
        assert_eq!(metadata["from_unit"], "Meters");
    }

    #[tokio::test]
    async fn test_execute_convert_action_without_rule() {
        let client = GeminiClient::new(AssistantConfig::default());
        let request = ExecuteActionRequest {
            action_type: ActionType::ConvertUnit {
                target: "Miles".to_string(),
            },
            params: serde_json::json!({"text": "5 km"}),
        };
        let err = execute_action(&client, request).await.unwrap_err();
        assert!(matches!(err, AppError::Calculation(_)));
    }

    #[tokio::test]
    async fn test_execute_convert_action_unparseable_text() {
        let client = GeminiClient::new(AssistantConfig::default());
        let request = ExecuteActionRequest {
            action_type: ActionType::ConvertUnit {
                target: "Meters".to_string(),
            },
            params: serde_json::json!({"text": "nothing to see"}),
        };
        let err = execute_action(&client, request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_commands_exposes_palette_entries() {
        let commands = list_commands().await.unwrap();
        assert!(commands.iter().any(|c| c.id == "convert_to_kilometers"));
        assert!(commands.iter().any(|c| c.id == "ask_assistant"));
    }
}
