//! Feature plugin system with enum dispatch
//!
//! Uses enum_dispatch for zero-cost abstraction and static dispatch.
//! Sync methods go through `FeatureSync`; async execution is handled
//! separately via async_trait because enum_dispatch is sync-only.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};
use std::sync::OnceLock;

use async_trait::async_trait;
use enum_dispatch::enum_dispatch;

pub mod assistant;
pub mod assistant_client;
pub mod unit_converter;

use assistant::AssistantFeature;
use assistant_client::GeminiClient;
use unit_converter::UnitConverterFeature;

/// External collaborators handed to features at execution time instead of
/// being read from process-global state.
pub struct FeatureContext<'a> {
    pub assistant: &'a GeminiClient,
}

#[enum_dispatch]
pub trait FeatureSync: Send + Sync {
    /// Unique identifier for this feature
    fn id(&self) -> &str;

    /// Widget commands open the feature's UI window.
    fn widget_commands(&self) -> Vec<CommandItem>;

    /// Action commands perform immediate actions without opening a window.
    /// Example: "Convert to Kilometers" converts the selected text.
    fn action_commands(&self) -> Vec<CommandItem>;
}

/// Async methods trait (separate from enum_dispatch)
#[async_trait]
pub trait FeatureAsync: Send + Sync {
    /// Execute an action for this feature.
    ///
    /// Returns `AppError::UnsupportedAction` when the action belongs to a
    /// different feature; any other error means this feature owned the action
    /// and failed.
    async fn execute_action(
        &self,
        ctx: &FeatureContext<'_>,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse>;
}

#[enum_dispatch(FeatureSync)]
pub enum AppFeature {
    Assistant(AssistantFeature),
    UnitConverter(UnitConverterFeature),
}

impl AppFeature {
    pub fn all() -> Vec<Self> {
        vec![
            AppFeature::Assistant(AssistantFeature),
            AppFeature::UnitConverter(UnitConverterFeature),
        ]
    }
}

/// Cached base command items
static BASE_COMMAND_ITEMS: OnceLock<Vec<CommandItem>> = OnceLock::new();

/// Get all command items from all features.
///
/// The command list is static for the lifetime of the process, so it is built
/// once and cloned on every request.
pub fn get_all_command_items() -> Vec<CommandItem> {
    BASE_COMMAND_ITEMS
        .get_or_init(|| {
            let mut items = vec![];
            for feature in AppFeature::all() {
                items.extend(feature.widget_commands());
                items.extend(feature.action_commands());
            }
            println!("[get_all_command_items] Cached {} commands", items.len());
            items
        })
        .clone()
}

/// Execute an action across all features
pub async fn execute_feature_action(
    ctx: &FeatureContext<'_>,
    request: &ExecuteActionRequest,
) -> AppResult<ExecuteActionResponse> {
    for feature in AppFeature::all() {
        // Manual dispatch for async methods (enum_dispatch doesn't support async)
        let result = match &feature {
            AppFeature::Assistant(f) => {
                f.execute_action(ctx, &request.action_type, &request.params).await
            }
            AppFeature::UnitConverter(f) => {
                f.execute_action(ctx, &request.action_type, &request.params).await
            }
        };
        match result {
            Ok(response) => return Ok(response),
            // Not this feature's action; try the next one.
            Err(AppError::UnsupportedAction) => continue,
            // The feature owned the action but failed; stop the walk.
            Err(e) => return Err(e),
        }
    }

    Err(AppError::Feature("Unknown action type".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_features_registered() {
        let features = AppFeature::all();
        assert_eq!(features.len(), 2);
        let ids: Vec<&str> = features.iter().map(|f| f.id()).collect();
        assert!(ids.contains(&"assistant"));
        assert!(ids.contains(&"unit_converter"));
    }

    #[test]
    fn test_command_items_include_both_widgets() {
        let items = get_all_command_items();
        assert!(items.iter().any(|c| c.id == "widget_assistant"));
        assert!(items.iter().any(|c| c.id == "widget_unit_converter"));
        // Action commands carry an action type, widget commands a widget type
        for item in &items {
            assert!(item.action_type.is_some() || item.widget_type.is_some());
        }
    }
}
