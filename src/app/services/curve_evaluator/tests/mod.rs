//! Shared helpers for curve evaluator tests


use crate::app::models::{Evaluation, EvaluationObject, MeasuringCurve};
use std::collections::HashMap;

/// Build a curve from (x, y) pairs in the given order
pub fn curve(points: &[(f64, f64)]) -> MeasuringCurve {
    let mut curve = MeasuringCurve::new();
    for &(x, y) in points {
        curve.push_sample(x, y);
    }
    curve
}

/// Build a bare evaluation object with the given reaction marker; boundary
/// fields start unset and are assigned directly by the tests
pub fn object(reaction: &str) -> EvaluationObject {
    let mut fields = HashMap::new();
    if !reaction.is_empty() {
        fields.insert("Reaction".to_string(), reaction.to_string());
    }

    EvaluationObject {
        identifier: "EO-01".to_string(),
        fields,
        x_min: None,
        x_max: None,
        y_min: None,
        y_max: None,
        x_ref: None,
        y_ref: None,
        evaluation: Evaluation::default(),
    }
}
