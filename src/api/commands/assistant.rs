//! Assistant command module

use chrono::Utc;

use crate::core::features::assistant_client::GeminiClient;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{AskAssistantRequest, AskAssistantResponse};

/// Forward a prompt to the assistant and return the reply.
///
/// Any provider failure (network, invalid key, quota, content policy)
/// surfaces as an error whose message the frontend displays as-is.
pub async fn ask_assistant(
    client: &GeminiClient,
    request: AskAssistantRequest,
) -> AppResult<AskAssistantResponse> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Validation("Prompt must not be empty".to_string()));
    }

    let reply = client.generate_reply(prompt).await?;

    Ok(AskAssistantResponse {
        reply,
        model: client.model().to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::settings::AssistantConfig;

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_before_any_request() {
        let client = GeminiClient::new(AssistantConfig::default());
        let request = AskAssistantRequest {
            prompt: "   ".to_string(),
        };
        let err = ask_assistant(&client, request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
