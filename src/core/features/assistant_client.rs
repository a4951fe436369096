use std::sync::OnceLock;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AssistantConfig;

const GENERATE_CONTENT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Lazy static HTTP client to reuse connection pool
static CLIENT: OnceLock<Client> = OnceLock::new();

fn get_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("assistant-widgets/assistant")
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

// -- Strict Serde Structs for the Gemini generateContent API --

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

// -- Public API --

/// Stateless Gemini client. Credentials arrive through the config handed to
/// the constructor; nothing is read from the environment here.
pub struct GeminiClient {
    config: AssistantConfig,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a single prompt and return the reply text. One request, one
    /// reply; no conversation history is kept.
    pub async fn generate_reply(&self, prompt: &str) -> AppResult<String> {
        if !self.config.is_configured() {
            return Err(AppError::Validation(
                "Gemini API key is not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/{}:generateContent?key={}",
            GENERATE_CONTENT_BASE,
            self.config.model,
            urlencoding::encode(&self.config.api_key)
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
                role: Some("user".to_string()),
            }],
        };

        let response = get_client().post(&url).json(&body).send().await.map_err(|e| {
            eprintln!("[GeminiClient] Network error: {}", e);
            AppError::Network(format!("Gemini API connection failed: {}", e))
        })?;

        if !response.status().is_success() {
            eprintln!("[GeminiClient] API returned error: {}", response.status());
            return Err(AppError::Network(format!(
                "Gemini API returned error: {}",
                response.status()
            )));
        }

        let parsed = response.json::<GenerateContentResponse>().await.map_err(|e| {
            eprintln!("[GeminiClient] Parse error: {}", e);
            AppError::Assistant(format!("Failed to parse Gemini response: {}", e))
        })?;

        extract_reply_text(parsed)
    }
}

/// Pull the reply out of a parsed response: the concatenated text parts of
/// the first candidate.
fn extract_reply_text(response: GenerateContentResponse) -> AppResult<String> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(AppError::Assistant(format!(
                "Prompt was blocked: {}",
                reason
            )));
        }
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Assistant("Model returned no candidates".to_string()))?;

    let finish_reason = candidate.finish_reason;
    let reply: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if reply.is_empty() {
        return Err(AppError::Assistant(format!(
            "Model returned an empty reply ({})",
            finish_reason.unwrap_or_else(|| "no finish reason".to_string())
        )));
    }

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_serialization_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "What is Rust?".to_string(),
                }],
                role: Some("user".to_string()),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is Rust?");
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_extract_reply_from_candidate() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{"text": "Rust is "}, {"text": "a systems language."}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        );
        let reply = extract_reply_text(response).unwrap();
        assert_eq!(reply, "Rust is a systems language.");
    }

    #[test]
    fn test_extract_reply_no_candidates() {
        let response = parse(r#"{"candidates": []}"#);
        let err = extract_reply_text(response).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_extract_reply_blocked_prompt() {
        let response = parse(
            r#"{
                "candidates": [],
                "promptFeedback": {"blockReason": "SAFETY"}
            }"#,
        );
        let err = extract_reply_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_extract_reply_empty_content() {
        let response = parse(
            r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#,
        );
        let err = extract_reply_text(response).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[tokio::test]
    async fn test_generate_reply_requires_api_key() {
        let client = GeminiClient::new(AssistantConfig::default());
        let err = client.generate_reply("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
