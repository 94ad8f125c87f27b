//! Verdict dispatch for evaluation objects

use super::rules;
use crate::app::models::{Evaluation, EvaluationObject, MeasuringCurve, ReactionType};
use tracing::debug;

/// Judge one criterion against the measured curve
///
/// The curve is never mutated; the returned evaluation is written back onto
/// the object by the caller. An empty curve short-circuits to UNKNOWN before
/// any reaction dispatch, and an unrecognized reaction marker is reported in
/// the justification rather than raised.
pub fn evaluate(object: &EvaluationObject, curve: &MeasuringCurve) -> Evaluation {
    if curve.is_empty() {
        return Evaluation::unknown("No curve data to evaluate");
    }

    let reaction = object.reaction();
    let evaluation = match ReactionType::from_marker(reaction) {
        Some(ReactionType::LineX) => rules::line_x(object, curve),
        Some(ReactionType::NoPass) => rules::no_pass(object, curve),
        Some(ReactionType::LineY) => rules::line_y(object, curve),
        Some(ReactionType::MinMax) | Some(ReactionType::LimitRange) => {
            rules::min_max(object, curve)
        }
        None => Evaluation::unknown(format!("Reaction type '{reaction}' not explicitly handled")),
    };

    debug!(
        "{} [{}] -> {}",
        object.identifier, reaction, evaluation.result
    );
    evaluation
}
