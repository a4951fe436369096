//! Assistant feature
//!
//! Forwards free-text prompts to the Gemini API and returns the reply.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionResponse};

use super::{FeatureAsync, FeatureContext, FeatureSync};
use async_trait::async_trait;

#[derive(Clone)]
pub struct AssistantFeature;

impl FeatureSync for AssistantFeature {
    fn id(&self) -> &str {
        "assistant"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_assistant".to_string(),
            label: "Ask Gemini".to_string(),
            description: Some("Ask the assistant anything".to_string()),
            action_type: None,
            widget_type: Some("assistant".to_string()),
        }]
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "ask_assistant".to_string(),
            label: "Ask Gemini about selection".to_string(),
            description: None,
            action_type: Some(ActionType::Ask),
            widget_type: None,
        }]
    }
}

#[async_trait]
impl FeatureAsync for AssistantFeature {
    async fn execute_action(
        &self,
        ctx: &FeatureContext<'_>,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::Ask => {
                let text = params
                    .get("text")
                    .and_then(|v| v.as_str())
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| {
                        AppError::Validation("Missing 'text' parameter".to_string())
                    })?;

                let reply = ctx.assistant.generate_reply(text).await?;

                Ok(ExecuteActionResponse {
                    result: reply,
                    metadata: Some(serde_json::json!({
                        "model": ctx.assistant.model(),
                        "widget": "assistant"
                    })),
                })
            }
            _ => Err(AppError::UnsupportedAction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::assistant_client::GeminiClient;
    use crate::shared::settings::AssistantConfig;

    #[tokio::test]
    async fn test_ask_requires_text_param() {
        let client = GeminiClient::new(AssistantConfig::default());
        let ctx = FeatureContext { assistant: &client };
        let err = AssistantFeature
            .execute_action(&ctx, &ActionType::Ask, &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_convert_action_is_not_ours() {
        let client = GeminiClient::new(AssistantConfig::default());
        let ctx = FeatureContext { assistant: &client };
        let action = ActionType::ConvertUnit {
            target: "Meters".to_string(),
        };
        let err = AssistantFeature
            .execute_action(&ctx, &action, &serde_json::json!({"text": "5 km"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedAction));
    }
}
