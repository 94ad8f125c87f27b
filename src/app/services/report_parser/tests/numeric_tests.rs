//! Tests for numeric token normalization

use crate::app::models::ProcessValue;
use crate::app::services::report_parser::numeric::{normalize_decimal, parse_value_unit};

#[test]
fn test_normalize_comma_decimal() {
    assert_eq!(normalize_decimal("12,5"), Some(12.5));
    assert_eq!(normalize_decimal("-3,25"), Some(-3.25));
    assert_eq!(normalize_decimal("+0,5"), Some(0.5));
}

#[test]
fn test_normalize_point_decimal() {
    assert_eq!(normalize_decimal("12.5"), Some(12.5));
    assert_eq!(normalize_decimal("42"), Some(42.0));
    assert_eq!(normalize_decimal(" 7 "), Some(7.0));
}

#[test]
fn test_normalize_rejects_non_numeric() {
    assert_eq!(normalize_decimal("N/A"), None);
    assert_eq!(normalize_decimal(""), None);
    assert_eq!(normalize_decimal("   "), None);
    assert_eq!(normalize_decimal("12,5,0"), None);
    assert_eq!(normalize_decimal("abc"), None);
}

#[test]
fn test_value_unit_with_comma_decimal() {
    assert_eq!(
        parse_value_unit("512,3 N"),
        ProcessValue {
            value: Some(512.3),
            unit: Some("N".to_string()),
        }
    );
}

#[test]
fn test_value_unit_without_whitespace() {
    assert_eq!(
        parse_value_unit("12.75mm"),
        ProcessValue {
            value: Some(12.75),
            unit: Some("mm".to_string()),
        }
    );
}

#[test]
fn test_value_unit_number_only() {
    assert_eq!(
        parse_value_unit("-5"),
        ProcessValue {
            value: Some(-5.0),
            unit: None,
        }
    );
}

#[test]
fn test_value_unit_without_leading_number() {
    assert_eq!(
        parse_value_unit("N/A"),
        ProcessValue {
            value: None,
            unit: Some("N/A".to_string()),
        }
    );
    assert_eq!(
        parse_value_unit("bar"),
        ProcessValue {
            value: None,
            unit: Some("bar".to_string()),
        }
    );
}

#[test]
fn test_value_unit_empty_input() {
    assert_eq!(parse_value_unit(""), ProcessValue::empty());
    assert_eq!(parse_value_unit("   "), ProcessValue::empty());
}
