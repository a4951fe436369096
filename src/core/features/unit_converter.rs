use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionResponse};

// Error constants - inline for now (can be moved to shared::error later)
const ERR_MISSING_TEXT_PARAM: &str = "Missing 'text' parameter";
const ERR_CANNOT_PARSE_QUANTITY: &str = "Could not parse a quantity from text";

use super::{FeatureAsync, FeatureContext, FeatureSync};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use std::collections::HashMap;

// ============================================================================
// Conversion Registry
// ============================================================================

/// A single directed conversion rule between two units of one category.
///
/// The rule kind is explicit: either a multiplicative factor or an arbitrary
/// one-argument function for affine relations such as Celsius/Fahrenheit.
#[derive(Debug, Clone, Copy)]
pub enum ConversionRule {
    Scalar(f64),
    Affine(fn(f64) -> f64),
}

impl ConversionRule {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            ConversionRule::Scalar(factor) => value * factor,
            ConversionRule::Affine(func) => func(value),
        }
    }
}

type RuleMap = HashMap<&'static str, ConversionRule>;
type SourceMap = HashMap<&'static str, RuleMap>;
type CategoryMap = HashMap<&'static str, SourceMap>;

// Affine temperature relations
fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

/// Static conversion table keyed category -> source unit -> target unit,
/// initialized once at startup.
///
/// The table is sparse and directional: a pair without an entry has no
/// conversion, and no inverse or transitive rule is ever derived from the
/// ones that exist. Kilometers registers a rule to Meters only, so
/// Kilometers -> Miles stays unavailable even though Meters -> Miles exists.
static CONVERSION_REGISTRY: Lazy<CategoryMap> = Lazy::new(|| {
    let mut registry: CategoryMap = HashMap::new();

    let mut length: SourceMap = HashMap::new();
    length.insert(
        "Meters",
        HashMap::from([
            ("Kilometers", ConversionRule::Scalar(0.001)),
            ("Centimeters", ConversionRule::Scalar(100.0)),
            ("Miles", ConversionRule::Scalar(0.000621371)),
            ("Feet", ConversionRule::Scalar(3.28084)),
        ]),
    );
    length.insert(
        "Kilometers",
        HashMap::from([("Meters", ConversionRule::Scalar(1000.0))]),
    );
    length.insert(
        "Feet",
        HashMap::from([("Meters", ConversionRule::Scalar(0.3048))]),
    );
    registry.insert("Length", length);

    let mut weight: SourceMap = HashMap::new();
    weight.insert(
        "Kilograms",
        HashMap::from([
            ("Grams", ConversionRule::Scalar(1000.0)),
            ("Pounds", ConversionRule::Scalar(2.20462)),
            ("Ounces", ConversionRule::Scalar(35.274)),
        ]),
    );
    weight.insert(
        "Grams",
        HashMap::from([("Kilograms", ConversionRule::Scalar(0.001))]),
    );
    weight.insert(
        "Pounds",
        HashMap::from([("Kilograms", ConversionRule::Scalar(0.453592))]),
    );
    registry.insert("Weight", weight);

    let mut temperature: SourceMap = HashMap::new();
    temperature.insert(
        "Celsius",
        HashMap::from([
            ("Fahrenheit", ConversionRule::Affine(celsius_to_fahrenheit)),
            ("Kelvin", ConversionRule::Affine(celsius_to_kelvin)),
        ]),
    );
    temperature.insert(
        "Fahrenheit",
        HashMap::from([("Celsius", ConversionRule::Affine(fahrenheit_to_celsius))]),
    );
    temperature.insert(
        "Kelvin",
        HashMap::from([("Celsius", ConversionRule::Affine(kelvin_to_celsius))]),
    );
    registry.insert("Temperature", temperature);

    let mut speed: SourceMap = HashMap::new();
    speed.insert(
        "Kilometers per Hour",
        HashMap::from([
            ("Miles per Hour", ConversionRule::Scalar(0.621371)),
            ("Meters per Second", ConversionRule::Scalar(0.277778)),
        ]),
    );
    speed.insert(
        "Miles per Hour",
        HashMap::from([("Kilometers per Hour", ConversionRule::Scalar(1.60934))]),
    );
    registry.insert("Speed", speed);

    let mut time: SourceMap = HashMap::new();
    time.insert(
        "Seconds",
        HashMap::from([
            ("Minutes", ConversionRule::Scalar(1.0 / 60.0)),
            ("Hours", ConversionRule::Scalar(1.0 / 3600.0)),
        ]),
    );
    time.insert(
        "Minutes",
        HashMap::from([
            ("Seconds", ConversionRule::Scalar(60.0)),
            ("Hours", ConversionRule::Scalar(1.0 / 60.0)),
        ]),
    );
    time.insert(
        "Hours",
        HashMap::from([("Minutes", ConversionRule::Scalar(60.0))]),
    );
    registry.insert("Time", time);

    let mut volume: SourceMap = HashMap::new();
    volume.insert(
        "Liters",
        HashMap::from([
            ("Milliliters", ConversionRule::Scalar(1000.0)),
            ("Gallons", ConversionRule::Scalar(0.264172)),
        ]),
    );
    volume.insert(
        "Gallons",
        HashMap::from([("Liters", ConversionRule::Scalar(3.78541))]),
    );
    volume.insert(
        "Milliliters",
        HashMap::from([("Liters", ConversionRule::Scalar(0.001))]),
    );
    registry.insert("Volume", volume);

    let mut area: SourceMap = HashMap::new();
    area.insert(
        "Square Meters",
        HashMap::from([
            ("Square Feet", ConversionRule::Scalar(10.7639)),
            ("Acres", ConversionRule::Scalar(0.000247105)),
        ]),
    );
    area.insert(
        "Acres",
        HashMap::from([("Square Meters", ConversionRule::Scalar(4046.86))]),
    );
    registry.insert("Area", area);

    let mut storage: SourceMap = HashMap::new();
    storage.insert(
        "Megabytes",
        HashMap::from([
            ("Kilobytes", ConversionRule::Scalar(1000.0)),
            ("Gigabytes", ConversionRule::Scalar(0.001)),
        ]),
    );
    storage.insert(
        "Gigabytes",
        HashMap::from([
            ("Megabytes", ConversionRule::Scalar(1000.0)),
            ("Terabytes", ConversionRule::Scalar(0.001)),
        ]),
    );
    registry.insert("Digital Storage", storage);

    let mut energy: SourceMap = HashMap::new();
    energy.insert(
        "Joules",
        HashMap::from([
            ("Calories", ConversionRule::Scalar(0.239006)),
            ("Kilojoules", ConversionRule::Scalar(0.001)),
        ]),
    );
    energy.insert(
        "Calories",
        HashMap::from([("Joules", ConversionRule::Scalar(4.184))]),
    );
    registry.insert("Energy", energy);

    let mut pressure: SourceMap = HashMap::new();
    pressure.insert(
        "Pascals",
        HashMap::from([
            ("PSI", ConversionRule::Scalar(0.000145038)),
            ("Bars", ConversionRule::Scalar(0.00001)),
        ]),
    );
    pressure.insert(
        "PSI",
        HashMap::from([("Pascals", ConversionRule::Scalar(6894.76))]),
    );
    registry.insert("Pressure", pressure);

    registry
});

// ============================================================================
// Conversion Engine
// ============================================================================

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Returns `None` when the category, the source unit, or the specific rule is
/// not in the registry. Absence is a normal outcome the caller must check;
/// an unknown category and a missing rule are not distinguished. The lookup
/// itself is pure: no rounding, no sign restriction, and NaN or infinite
/// inputs propagate with standard f64 semantics.
pub fn convert(category: &str, from_unit: &str, to_unit: &str, value: f64) -> Option<f64> {
    CONVERSION_REGISTRY
        .get(category)?
        .get(from_unit)?
        .get(to_unit)
        .map(|rule| rule.apply(value))
}

/// All category names, sorted for stable frontend population.
pub fn categories() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CONVERSION_REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Source units registered under a category, or `None` for an unknown
/// category.
pub fn source_units(category: &str) -> Option<Vec<&'static str>> {
    let sources = CONVERSION_REGISTRY.get(category)?;
    let mut names: Vec<&'static str> = sources.keys().copied().collect();
    names.sort_unstable();
    Some(names)
}

/// Target units a source unit has rules for. The frontend restricts the
/// destination choices to this list, so "no rule" outcomes stay rare.
pub fn conversion_targets(category: &str, from_unit: &str) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CONVERSION_REGISTRY
        .get(category)
        .and_then(|sources| sources.get(from_unit))
        .map(|rules| rules.keys().copied().collect())
        .unwrap_or_default();
    names.sort_unstable();
    names
}

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Clone)]
pub struct UnitConverterFeature;

impl FeatureSync for UnitConverterFeature {
    fn id(&self) -> &str {
        "unit_converter"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_unit_converter".to_string(),
            label: "Unit Converter".to_string(),
            description: Some("Convert between units".to_string()),
            action_type: None,
            widget_type: Some("unit_converter".to_string()),
        }]
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        // Quick conversions of selected text via the command palette.
        // Only units that appear as a rule target are listed.
        vec![
            // Length
            ("convert_to_meters", "Convert to Meters", "Meters"),
            ("convert_to_kilometers", "Convert to Kilometers", "Kilometers"),
            ("convert_to_centimeters", "Convert to Centimeters", "Centimeters"),
            ("convert_to_miles", "Convert to Miles", "Miles"),
            ("convert_to_feet", "Convert to Feet", "Feet"),
            // Weight
            ("convert_to_kilograms", "Convert to Kilograms", "Kilograms"),
            ("convert_to_grams", "Convert to Grams", "Grams"),
            ("convert_to_pounds", "Convert to Pounds", "Pounds"),
            ("convert_to_ounces", "Convert to Ounces", "Ounces"),
            // Temperature
            ("convert_to_celsius", "Convert to Celsius", "Celsius"),
            ("convert_to_fahrenheit", "Convert to Fahrenheit", "Fahrenheit"),
            ("convert_to_kelvin", "Convert to Kelvin", "Kelvin"),
            // Speed
            ("convert_to_kmh", "Convert to Kilometers per Hour", "Kilometers per Hour"),
            ("convert_to_mph", "Convert to Miles per Hour", "Miles per Hour"),
            ("convert_to_ms", "Convert to Meters per Second", "Meters per Second"),
            // Time
            ("convert_to_seconds", "Convert to Seconds", "Seconds"),
            ("convert_to_minutes", "Convert to Minutes", "Minutes"),
            ("convert_to_hours", "Convert to Hours", "Hours"),
            // Volume
            ("convert_to_liters", "Convert to Liters", "Liters"),
            ("convert_to_milliliters", "Convert to Milliliters", "Milliliters"),
            ("convert_to_gallons", "Convert to Gallons", "Gallons"),
            // Area
            ("convert_to_sqm", "Convert to Square Meters", "Square Meters"),
            ("convert_to_sqft", "Convert to Square Feet", "Square Feet"),
            ("convert_to_acres", "Convert to Acres", "Acres"),
            // Digital Storage
            ("convert_to_kilobytes", "Convert to Kilobytes", "Kilobytes"),
            ("convert_to_megabytes", "Convert to Megabytes", "Megabytes"),
            ("convert_to_gigabytes", "Convert to Gigabytes", "Gigabytes"),
            ("convert_to_terabytes", "Convert to Terabytes", "Terabytes"),
            // Energy
            ("convert_to_joules", "Convert to Joules", "Joules"),
            ("convert_to_calories", "Convert to Calories", "Calories"),
            ("convert_to_kilojoules", "Convert to Kilojoules", "Kilojoules"),
            // Pressure
            ("convert_to_pascals", "Convert to Pascals", "Pascals"),
            ("convert_to_psi", "Convert to PSI", "PSI"),
            ("convert_to_bars", "Convert to Bars", "Bars"),
        ]
        .into_iter()
        .map(|(id, label, target_unit)| CommandItem {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            action_type: Some(ActionType::ConvertUnit {
                target: target_unit.to_string(),
            }),
            widget_type: None,
        })
        .collect()
    }
}

#[async_trait]
impl FeatureAsync for UnitConverterFeature {
    async fn execute_action(
        &self,
        _ctx: &FeatureContext<'_>,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        match action {
            ActionType::ConvertUnit { target } => {
                let text = params
                    .get("text")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| AppError::Validation(ERR_MISSING_TEXT_PARAM.to_string()))?;

                let (amount, category, source_unit) =
                    parse_quantity_from_text(text).map_err(AppError::Validation)?;

                // Same unit, nothing to look up
                let converted = if source_unit == target.as_str() {
                    amount
                } else {
                    convert(category, source_unit, target, amount).ok_or_else(|| {
                        AppError::Calculation(format!(
                            "No conversion rule registered from {} to {}",
                            source_unit, target
                        ))
                    })?
                };

                let result_string = format!("{} {}", format_number(converted), target);

                Ok(ExecuteActionResponse {
                    result: result_string,
                    metadata: Some(json!({
                        "category": category,
                        "from_unit": source_unit,
                        "target_unit": target,
                        "original_amount": amount,
                        "converted_amount": converted,
                        "widget": "unit_converter"
                    })),
                })
            }
            _ => Err(AppError::UnsupportedAction),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

// Unit aliases mapping a lowercased token to (category, canonical unit name)
fn normalize_unit(unit: &str) -> Option<(&'static str, &'static str)> {
    let unit_lower = unit.to_lowercase();
    match unit_lower.as_str() {
        // Length
        "m" | "meter" | "meters" | "metre" | "metres" => Some(("Length", "Meters")),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
            Some(("Length", "Kilometers"))
        }
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
            Some(("Length", "Centimeters"))
        }
        "mi" | "mile" | "miles" => Some(("Length", "Miles")),
        "ft" | "foot" | "feet" => Some(("Length", "Feet")),
        // Weight
        "kg" | "kilogram" | "kilograms" => Some(("Weight", "Kilograms")),
        "g" | "gram" | "grams" => Some(("Weight", "Grams")),
        "lb" | "lbs" | "pound" | "pounds" => Some(("Weight", "Pounds")),
        "oz" | "ounce" | "ounces" => Some(("Weight", "Ounces")),
        // Temperature
        "c" | "°c" | "celsius" => Some(("Temperature", "Celsius")),
        "f" | "°f" | "fahrenheit" => Some(("Temperature", "Fahrenheit")),
        "k" | "kelvin" => Some(("Temperature", "Kelvin")),
        // Speed
        "km/h" | "kmh" | "kph" => Some(("Speed", "Kilometers per Hour")),
        "mph" | "mi/h" => Some(("Speed", "Miles per Hour")),
        "m/s" => Some(("Speed", "Meters per Second")),
        // Time
        "s" | "sec" | "secs" | "second" | "seconds" => Some(("Time", "Seconds")),
        "min" | "mins" | "minute" | "minutes" => Some(("Time", "Minutes")),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(("Time", "Hours")),
        // Volume
        "l" | "liter" | "liters" | "litre" | "litres" => Some(("Volume", "Liters")),
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
            Some(("Volume", "Milliliters"))
        }
        "gal" | "gallon" | "gallons" => Some(("Volume", "Gallons")),
        // Area
        "sqm" => Some(("Area", "Square Meters")),
        "sqft" => Some(("Area", "Square Feet")),
        "acre" | "acres" => Some(("Area", "Acres")),
        // Digital Storage
        "kb" | "kilobyte" | "kilobytes" => Some(("Digital Storage", "Kilobytes")),
        "mb" | "megabyte" | "megabytes" => Some(("Digital Storage", "Megabytes")),
        "gb" | "gigabyte" | "gigabytes" => Some(("Digital Storage", "Gigabytes")),
        "tb" | "terabyte" | "terabytes" => Some(("Digital Storage", "Terabytes")),
        // Energy
        "j" | "joule" | "joules" => Some(("Energy", "Joules")),
        "cal" | "calorie" | "calories" => Some(("Energy", "Calories")),
        "kj" | "kilojoule" | "kilojoules" => Some(("Energy", "Kilojoules")),
        // Pressure
        "pa" | "pascal" | "pascals" => Some(("Pressure", "Pascals")),
        "psi" => Some(("Pressure", "PSI")),
        "bar" | "bars" => Some(("Pressure", "Bars")),
        _ => None,
    }
}

// Multi-word units must win before the single-token pattern, otherwise
// "100 kilometers per hour" parses as plain kilometers.
const MULTIWORD_ALIASES: &[(&str, &str, &str)] = &[
    ("kilometers per hour", "Speed", "Kilometers per Hour"),
    ("kilometres per hour", "Speed", "Kilometers per Hour"),
    ("miles per hour", "Speed", "Miles per Hour"),
    ("meters per second", "Speed", "Meters per Second"),
    ("metres per second", "Speed", "Meters per Second"),
    ("square meters", "Area", "Square Meters"),
    ("square metres", "Area", "Square Meters"),
    ("square meter", "Area", "Square Meters"),
    ("square metre", "Area", "Square Meters"),
    ("square feet", "Area", "Square Feet"),
    ("square foot", "Area", "Square Feet"),
];

// Fallback word scan, longest alias first so "kilojoules" wins over "joules"
// and "milliliters" over "liters".
const WORD_ALIASES: &[(&str, &str, &str)] = &[
    ("centimeters", "Length", "Centimeters"),
    ("centimetres", "Length", "Centimeters"),
    ("centimeter", "Length", "Centimeters"),
    ("centimetre", "Length", "Centimeters"),
    ("kilometers", "Length", "Kilometers"),
    ("kilometres", "Length", "Kilometers"),
    ("kilometer", "Length", "Kilometers"),
    ("kilometre", "Length", "Kilometers"),
    ("milliliters", "Volume", "Milliliters"),
    ("millilitres", "Volume", "Milliliters"),
    ("milliliter", "Volume", "Milliliters"),
    ("millilitre", "Volume", "Milliliters"),
    ("kilograms", "Weight", "Kilograms"),
    ("kilogram", "Weight", "Kilograms"),
    ("kilojoules", "Energy", "Kilojoules"),
    ("kilojoule", "Energy", "Kilojoules"),
    ("fahrenheit", "Temperature", "Fahrenheit"),
    ("megabytes", "Digital Storage", "Megabytes"),
    ("megabyte", "Digital Storage", "Megabytes"),
    ("kilobytes", "Digital Storage", "Kilobytes"),
    ("kilobyte", "Digital Storage", "Kilobytes"),
    ("gigabytes", "Digital Storage", "Gigabytes"),
    ("gigabyte", "Digital Storage", "Gigabytes"),
    ("terabytes", "Digital Storage", "Terabytes"),
    ("terabyte", "Digital Storage", "Terabytes"),
    ("calories", "Energy", "Calories"),
    ("calorie", "Energy", "Calories"),
    ("pascals", "Pressure", "Pascals"),
    ("pascal", "Pressure", "Pascals"),
    ("celsius", "Temperature", "Celsius"),
    ("kelvin", "Temperature", "Kelvin"),
    ("seconds", "Time", "Seconds"),
    ("second", "Time", "Seconds"),
    ("minutes", "Time", "Minutes"),
    ("minute", "Time", "Minutes"),
    ("gallons", "Volume", "Gallons"),
    ("gallon", "Volume", "Gallons"),
    ("joules", "Energy", "Joules"),
    ("joule", "Energy", "Joules"),
    ("meters", "Length", "Meters"),
    ("metres", "Length", "Meters"),
    ("meter", "Length", "Meters"),
    ("metre", "Length", "Meters"),
    ("pounds", "Weight", "Pounds"),
    ("pound", "Weight", "Pounds"),
    ("ounces", "Weight", "Ounces"),
    ("ounce", "Weight", "Ounces"),
    ("liters", "Volume", "Liters"),
    ("litres", "Volume", "Liters"),
    ("liter", "Volume", "Liters"),
    ("litre", "Volume", "Liters"),
    ("grams", "Weight", "Grams"),
    ("gram", "Weight", "Grams"),
    ("miles", "Length", "Miles"),
    ("mile", "Length", "Miles"),
    ("hours", "Time", "Hours"),
    ("hour", "Time", "Hours"),
    ("acres", "Area", "Acres"),
    ("acre", "Area", "Acres"),
    ("feet", "Length", "Feet"),
    ("foot", "Length", "Feet"),
    ("bars", "Pressure", "Bars"),
    ("psi", "Pressure", "PSI"),
];

// LAX PARSING: no anchors, extract the first number/unit pair found anywhere
static RE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z°/]+)")
        .expect("Failed to compile amount/unit pattern")
});

static RE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([+-]?\d+(?:\.\d+)?)").expect("Failed to compile amount pattern"));

/// Parse amount, category and source unit from text
/// (e.g. "100m", "12 km", "3.5 kilometers", "-40 °C", "250 square feet").
pub fn parse_quantity_from_text(text: &str) -> Result<(f64, &'static str, &'static str), String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Empty text".to_string());
    }

    // Normalize comma decimal separators to dots
    let normalized_text = text.replace(',', ".");
    let text_lower = normalized_text.to_lowercase();

    let amount = RE_AMOUNT
        .captures(&normalized_text)
        .and_then(|caps| caps[1].parse::<f64>().ok());

    // Pass 1: multi-word unit phrases
    if let Some(amount) = amount {
        for (alias, category, unit) in MULTIWORD_ALIASES {
            if text_lower.contains(alias) {
                return Ok((amount, category, unit));
            }
        }
    }

    // Pass 2: number directly followed by a unit token (e.g. "12km", "12 km")
    if let Some(caps) = RE_AMOUNT_UNIT.captures(&normalized_text) {
        if let (Ok(amount), Some(unit_str)) = (caps[1].parse::<f64>(), caps.get(2)) {
            if let Some((category, unit)) = normalize_unit(unit_str.as_str()) {
                return Ok((amount, category, unit));
            }
        }
    }

    // Pass 3: any number plus a known unit word anywhere in the text
    if let Some(amount) = amount {
        for (alias, category, unit) in WORD_ALIASES {
            if text_lower.contains(alias) {
                return Ok((amount, category, unit));
            }
        }
    }

    println!("[parse_quantity_from_text] Failed to parse: '{}'", text);
    Err(format!("{}: {}", ERR_CANNOT_PARSE_QUANTITY, text))
}

// Format number with thousands separators, max 2 decimals, strip trailing
// zeros. Examples: 130000.0 -> "130,000", 12.5 -> "12.5", 12.567 -> "12.57"
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let rounded = (value * 100.0).round() / 100.0;
    let mut formatted = format!("{:.2}", rounded);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }

    let negative = formatted.starts_with('-');
    let body = formatted.trim_start_matches('-');
    let (integer_part, decimal_part) = match body.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (body, None),
    };

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&add_thousands_separators(integer_part));
    if let Some(dec) = decimal_part {
        result.push('.');
        result.push_str(dec);
    }
    result
}

// Insert ',' every three digits counting from the right
fn add_thousands_separators(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
