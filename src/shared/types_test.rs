//! Serialization shape tests for the IPC types consumed by the frontend.

#[cfg(test)]
mod tests {
    use crate::shared::types::*;

    #[test]
    fn test_action_type_adjacent_tagging() {
        let action = ActionType::ConvertUnit {
            target: "Kilometers".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "ConvertUnit");
        assert_eq!(json["payload"]["target"], "Kilometers");

        let ask = serde_json::to_value(&ActionType::Ask).unwrap();
        assert_eq!(ask["type"], "Ask");
    }

    #[test]
    fn test_action_type_round_trip() {
        let json = r#"{"type":"ConvertUnit","payload":{"target":"Pounds"}}"#;
        let action: ActionType = serde_json::from_str(json).unwrap();
        match action {
            ActionType::ConvertUnit { target } => assert_eq!(target, "Pounds"),
            other => panic!("Unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_missing_conversion_serializes_as_null() {
        let response = ConvertUnitsResponse {
            category: "Length".to_string(),
            from_unit: "Kilometers".to_string(),
            to_unit: "Miles".to_string(),
            amount: 5.0,
            result: None,
            formatted_result: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["result"].is_null());
        assert!(json["formatted_result"].is_null());
    }
}
