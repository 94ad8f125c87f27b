//! Numeric token normalization for locale-mixed report fields
//!
//! Report exports write decimals with either a comma or a point separator,
//! and process values carry their unit in the same cell as the magnitude.
//! These helpers never fail: anything unparsable becomes `None`.

use crate::app::models::ProcessValue;
use regex::Regex;
use std::sync::LazyLock;

/// Leading signed numeric literal (comma or point decimal separator),
/// optionally followed by whitespace and a trailing unit token
static VALUE_UNIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?\d+(?:[.,]\d+)?)\s*(\S*)").expect("valid pattern"));

/// Convert a locale-formatted numeric token into a float
///
/// Comma decimal separators are normalized to points before parsing.
/// Unparsable tokens (including the `N/A` sentinel and empty strings)
/// yield `None`.
pub fn normalize_decimal(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

/// Split a `"512,3 N"` style token into magnitude and unit
///
/// When no leading number is found the whole trimmed text becomes the unit;
/// empty input yields an empty process value.
pub fn parse_value_unit(text: &str) -> ProcessValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ProcessValue::empty();
    }

    if let Some(captures) = VALUE_UNIT_PATTERN.captures(trimmed) {
        let value = captures.get(1).and_then(|m| normalize_decimal(m.as_str()));
        let unit = captures
            .get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        ProcessValue { value, unit }
    } else {
        ProcessValue {
            value: None,
            unit: Some(trimmed.to_string()),
        }
    }
}
