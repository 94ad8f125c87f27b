//! Geometric verdict rules
//!
//! Each rule scans the curve in stored file order; order matters for the
//! "first inside vs first outside" tie-breaks of LINE-X and NO-PASS. All
//! interval comparisons are inclusive at both boundaries.

use crate::app::models::{CurvePoint, Evaluation, EvaluationObject, MeasuringCurve, Verdict};
use crate::constants::X_REF_TOLERANCE;

/// LINE-X: the curve must reach height YMin while inside [XMin, XMax]
///
/// The first sample with `y >= YMin` whose `x` lies inside the interval wins
/// and stops the scan. A sample reaching the height outside the interval is
/// remembered, but a later inside match still takes precedence.
pub fn line_x(object: &EvaluationObject, curve: &MeasuringCurve) -> Evaluation {
    let (Some(x_min), Some(x_max), Some(y_min)) = (object.x_min, object.x_max, object.y_min)
    else {
        return Evaluation::unknown("Missing XMin/XMax/YMin");
    };

    let mut crossed_outside: Option<CurvePoint> = None;
    for point in curve.points() {
        if point.y >= y_min {
            if x_min <= point.x && point.x <= x_max {
                return Evaluation::with_crossing(
                    Verdict::Ok,
                    format!("Reached YMin ({y_min}) inside interval [{x_min},{x_max}]"),
                    point,
                );
            }
            if crossed_outside.is_none() {
                crossed_outside = Some(point);
            }
        }
    }

    match crossed_outside {
        Some(point) => Evaluation::with_crossing(
            Verdict::NokOutOfRange,
            format!("Reached YMin ({y_min}) but outside X-range [{x_min},{x_max}]"),
            point,
        ),
        None => Evaluation::new(Verdict::Nok, format!("Did not reach YMin ({y_min})")),
    }
}

/// NO-PASS: the curve must not exceed the limit while inside [XMin, XMax]
///
/// The limit is read from YMax; exports that leave YMax blank carry the
/// limit in YMin instead, a convention of the data preserved as found. The
/// first inside exceedance wins and stops the scan.
pub fn no_pass(object: &EvaluationObject, curve: &MeasuringCurve) -> Evaluation {
    let limit = object.y_max.or(object.y_min);
    let (Some(x_min), Some(x_max), Some(limit)) = (object.x_min, object.x_max, limit) else {
        return Evaluation::unknown("Missing XMin/XMax/YMax (limit)");
    };

    let mut exceeded_outside: Option<CurvePoint> = None;
    for point in curve.points() {
        if point.y > limit {
            if x_min <= point.x && point.x <= x_max {
                return Evaluation::with_crossing(
                    Verdict::Nok,
                    format!("Exceeded limit ({limit}) inside X-range [{x_min},{x_max}]"),
                    point,
                );
            }
            if exceeded_outside.is_none() {
                exceeded_outside = Some(point);
            }
        }
    }

    match exceeded_outside {
        Some(point) => Evaluation::with_crossing(
            Verdict::NokOutOfRange,
            format!("Exceeded limit ({limit}) but outside X-range [{x_min},{x_max}]"),
            point,
        ),
        None => Evaluation::new(
            Verdict::Ok,
            format!("Did not exceed limit ({limit}) in X-range [{x_min},{x_max}]"),
        ),
    }
}

/// LINE-Y: the force at the reference displacement must lie in [YMin, YMax]
///
/// The checked sample is the first one whose `x` matches XRef within the
/// absolute tolerance, falling back to the sample nearest to XRef over the
/// whole curve. The fallback has no distance ceiling. The crossing point is
/// recorded for both verdicts.
pub fn line_y(object: &EvaluationObject, curve: &MeasuringCurve) -> Evaluation {
    let (Some(x_ref), Some(y_min), Some(y_max)) = (object.x_ref, object.y_min, object.y_max)
    else {
        return Evaluation::unknown("Missing X (ref) or YMin/YMax");
    };

    match point_at(curve, x_ref) {
        Some(point) => {
            if y_min <= point.y && point.y <= y_max {
                Evaluation::with_crossing(
                    Verdict::Ok,
                    format!("Value at Xref ({x_ref}) within Y range [{y_min},{y_max}]"),
                    point,
                )
            } else {
                Evaluation::with_crossing(
                    Verdict::Nok,
                    format!("Value at Xref ({x_ref}) outside Y range [{y_min},{y_max}]"),
                    point,
                )
            }
        }
        None => Evaluation::new(
            Verdict::Nok,
            format!("Could not find curve point near Xref ({x_ref})"),
        ),
    }
}

/// Locate the sample at `x_ref`: exact within tolerance first, otherwise the
/// nearest sample overall. Strict `<` during the scan keeps ties on the
/// first sample in file order.
fn point_at(curve: &MeasuringCurve, x_ref: f64) -> Option<CurvePoint> {
    let mut nearest: Option<(f64, CurvePoint)> = None;

    for point in curve.points() {
        let distance = (point.x - x_ref).abs();
        if distance <= X_REF_TOLERANCE {
            return Some(point);
        }
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, point));
        }
    }

    nearest.map(|(_, point)| point)
}

/// MIN-MAX / LIMIT-RANGE: at least one sample inside the closed rectangle
/// [XMin, XMax] x [YMin, YMax]
///
/// The rule is existential, so no crossing point is recorded.
pub fn min_max(object: &EvaluationObject, curve: &MeasuringCurve) -> Evaluation {
    let (Some(x_min), Some(x_max), Some(y_min), Some(y_max)) =
        (object.x_min, object.x_max, object.y_min, object.y_max)
    else {
        return Evaluation::unknown("Missing rectangle boundaries");
    };

    let any_inside = curve
        .points()
        .any(|p| x_min <= p.x && p.x <= x_max && y_min <= p.y && p.y <= y_max);

    if any_inside {
        Evaluation::new(Verdict::Ok, "At least one point inside limit rectangle")
    } else {
        Evaluation::new(Verdict::Nok, "No point within limit rectangle")
    }
}
