//! Unit converter command module

use crate::core::features::unit_converter;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    ConvertUnitsRequest, ConvertUnitsResponse, GetCategoriesResponse, GetUnitsResponse,
    ParseQuantityResponse,
};

/// Convert an amount between two units of a category.
///
/// A pair without a registered rule produces a response with `result: None`;
/// the frontend renders that as "not available". Errors are reserved for the
/// assistant and parsing paths.
pub async fn convert_units(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let result = unit_converter::convert(
        &request.category,
        &request.from_unit,
        &request.to_unit,
        request.amount,
    );

    println!(
        "[convert_units] {} {} -> {} ({}): {:?}",
        request.amount, request.from_unit, request.to_unit, request.category, result
    );

    Ok(ConvertUnitsResponse {
        formatted_result: result.map(unit_converter::format_number),
        category: request.category,
        from_unit: request.from_unit,
        to_unit: request.to_unit,
        amount: request.amount,
        result,
    })
}

/// All known categories, for the category selector.
pub async fn get_categories() -> AppResult<GetCategoriesResponse> {
    let categories = unit_converter::categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(GetCategoriesResponse { categories })
}

/// Source units registered under a category, for the from-unit selector.
pub async fn get_source_units(category: String) -> AppResult<GetUnitsResponse> {
    let units = unit_converter::source_units(&category)
        .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", category)))?;
    Ok(GetUnitsResponse {
        units: units.into_iter().map(str::to_string).collect(),
    })
}

/// Target units the chosen source unit has rules for. The frontend populates
/// the to-unit selector from this list.
pub async fn get_conversion_targets(
    category: String,
    from_unit: String,
) -> AppResult<GetUnitsResponse> {
    let units = unit_converter::conversion_targets(&category, &from_unit);
    Ok(GetUnitsResponse {
        units: units.into_iter().map(str::to_string).collect(),
    })
}

/// Parse a free-text quantity like "3.5 kilometers" into amount, unit and
/// category.
pub async fn parse_quantity(text: String) -> AppResult<ParseQuantityResponse> {
    let (amount, category, unit) =
        unit_converter::parse_quantity_from_text(&text).map_err(AppError::Validation)?;
    Ok(ParseQuantityResponse {
        amount,
        unit: unit.to_string(),
        category: category.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_units_success() {
        let response = convert_units(ConvertUnitsRequest {
            category: "Length".to_string(),
            from_unit: "Meters".to_string(),
            to_unit: "Kilometers".to_string(),
            amount: 1000.0,
        })
        .await
        .unwrap();

        assert_eq!(response.result, Some(1.0));
        assert_eq!(response.formatted_result.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_convert_units_missing_rule_is_not_an_error() {
        let response = convert_units(ConvertUnitsRequest {
            category: "Length".to_string(),
            from_unit: "Kilometers".to_string(),
            to_unit: "Miles".to_string(),
            amount: 5.0,
        })
        .await
        .unwrap();

        assert_eq!(response.result, None);
        assert_eq!(response.formatted_result, None);
    }

    #[tokio::test]
    async fn test_get_categories_lists_all_ten() {
        let response = get_categories().await.unwrap();
        assert_eq!(response.categories.len(), 10);
        assert!(response.categories.contains(&"Digital Storage".to_string()));
    }

    #[tokio::test]
    async fn test_get_source_units_unknown_category() {
        let err = get_source_units("Luminosity".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_conversion_targets_for_meters() {
        let response = get_conversion_targets("Length".to_string(), "Meters".to_string())
            .await
            .unwrap();
        assert_eq!(response.units, vec!["Centimeters", "Feet", "Kilometers", "Miles"]);
    }

    #[tokio::test]
    async fn test_parse_quantity_command() {
        let response = parse_quantity("250 ml".to_string()).await.unwrap();
        assert_eq!(response.amount, 250.0);
        assert_eq!(response.unit, "Milliliters");
        assert_eq!(response.category, "Volume");
    }
}
