use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub amount: f64,
}

/// `result` is `None` when the registry holds no rule for the requested pair.
/// That is a normal outcome the frontend renders as "not available", not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsResponse {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub amount: f64,
    pub result: Option<f64>,
    pub formatted_result: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUnitsResponse {
    pub units: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseQuantityResponse {
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskAssistantRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskAssistantResponse {
    pub reply: String,
    pub model: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub action_type: Option<ActionType>,
    pub widget_type: Option<String>,
}

// Action types for command palette and widget actions
// Using adjacently tagged serialization for frontend compatibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ActionType {
    /// Send the captured text to the assistant as a prompt
    Ask,
    /// Convert the quantity parsed from the captured text to `target`
    ConvertUnit { target: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteActionRequest {
    pub action_type: ActionType,
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteActionResponse {
    pub result: String,
    pub metadata: Option<serde_json::Value>,
}
