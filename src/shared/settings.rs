use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub assistant: AssistantConfig,
    pub preferences: ConverterPreferences,
}

/// Configuration for the Gemini client. Constructed explicitly by the
/// embedding application and handed to `GeminiClient::new` at startup; the
/// core never reads process-global state on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig::default(),
            preferences: ConverterPreferences {
                default_category: "Length".to_string(),
                default_from_unit: "Meters".to_string(),
                default_to_unit: "Kilometers".to_string(),
            },
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
        }
    }
}

impl AppSettings {
    /// Read the assistant credentials from `GEMINI_API_KEY` / `GEMINI_MODEL`.
    /// Only runs when the embedding application calls it.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            settings.assistant.api_key = key;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.is_empty() {
                settings.assistant.model = model;
            }
        }
        settings
    }
}

impl AssistantConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
