//! Data models for Kistler report processing
//!
//! This module contains the core data structures representing one parsed and
//! evaluated report: result metadata, process values, the measured curve,
//! and the evaluation criteria with their verdicts. All values are built in
//! a single pass per parse call and never mutated afterwards.

use crate::constants::REACTION_COLUMN;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Process Values
// =============================================================================

/// A named process value with optional magnitude and unit
///
/// Report exports render process values as locale-formatted number/unit
/// pairs ("512,3 N"); either half may be missing or unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessValue {
    /// Numeric magnitude, if the token parsed as a number
    pub value: Option<f64>,

    /// Unit token, if one followed the magnitude (or the whole token when no
    /// leading number was found)
    pub unit: Option<String>,
}

impl ProcessValue {
    /// A process value with neither magnitude nor unit
    pub fn empty() -> Self {
        Self {
            value: None,
            unit: None,
        }
    }
}

// =============================================================================
// Measuring Curve
// =============================================================================

/// One measured force/displacement sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Displacement in mm
    pub x: f64,
    /// Force in N
    pub y: f64,
}

/// The ordered displacement/force samples of one physical test run
///
/// `X` and `Y` always have equal length; samples keep file order, which is
/// not necessarily monotonic in either axis. Both sequences are empty when
/// the report carried no curve table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuringCurve {
    #[serde(rename = "X")]
    x: Vec<f64>,
    #[serde(rename = "Y")]
    y: Vec<f64>,
}

impl MeasuringCurve {
    /// Create an empty curve
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample, keeping the parallel sequences in lockstep
    pub fn push_sample(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Displacement values in file order
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Force values in file order
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterate over the samples in file order
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| CurvePoint { x, y })
    }
}

// =============================================================================
// Verdicts and Reaction Types
// =============================================================================

/// Outcome of evaluating one criterion against the measured curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The criterion is satisfied
    #[serde(rename = "OK")]
    Ok,

    /// The criterion is violated
    #[serde(rename = "NOK")]
    Nok,

    /// The decisive curve behaviour occurred outside the criterion's X range
    #[serde(rename = "NOK_OUT_OF_RANGE")]
    NokOutOfRange,

    /// The criterion could not be judged (no curve, missing boundaries, or
    /// unrecognized reaction type)
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Verdict {
    /// Wire representation of this verdict
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::Nok => "NOK",
            Verdict::NokOutOfRange => "NOK_OUT_OF_RANGE",
            Verdict::Unknown => "UNKNOWN",
        }
    }

    /// Check whether this verdict counts as a pass
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The geometric rule governing how a criterion's verdict is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionType {
    /// Curve must reach YMin while inside [XMin, XMax]
    LineX,
    /// Curve must not exceed the limit while inside [XMin, XMax]
    NoPass,
    /// Force at the X reference must lie within [YMin, YMax]
    LineY,
    /// At least one sample inside the [XMin,XMax] x [YMin,YMax] rectangle
    MinMax,
    /// Alias of MIN-MAX in the export format
    LimitRange,
}

impl ReactionType {
    /// Resolve a raw reaction marker; unrecognized markers yield `None` and
    /// evaluate to an UNKNOWN verdict downstream
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "LINE-X" => Some(ReactionType::LineX),
            "NO-PASS" => Some(ReactionType::NoPass),
            "LINE-Y" => Some(ReactionType::LineY),
            "MIN-MAX" => Some(ReactionType::MinMax),
            "LIMIT-RANGE" => Some(ReactionType::LimitRange),
            _ => None,
        }
    }

    /// The marker string of this reaction type
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionType::LineX => "LINE-X",
            ReactionType::NoPass => "NO-PASS",
            ReactionType::LineY => "LINE-Y",
            ReactionType::MinMax => "MIN-MAX",
            ReactionType::LimitRange => "LIMIT-RANGE",
        }
    }
}

// =============================================================================
// Evaluation Objects
// =============================================================================

/// Verdict, justification, and the decisive curve sample of one criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// The computed verdict
    #[serde(rename = "evaluation_result")]
    pub result: Verdict,

    /// Human-readable justification of the verdict
    #[serde(rename = "evaluation_reason")]
    pub reason: String,

    /// Displacement of the curve sample that determined the verdict
    pub x_cross: Option<f64>,

    /// Force of the curve sample that determined the verdict
    pub y_cross: Option<f64>,
}

impl Evaluation {
    /// A verdict without a decisive curve sample
    pub fn new(result: Verdict, reason: impl Into<String>) -> Self {
        Self {
            result,
            reason: reason.into(),
            x_cross: None,
            y_cross: None,
        }
    }

    /// A verdict pinned to the curve sample that determined it
    pub fn with_crossing(result: Verdict, reason: impl Into<String>, point: CurvePoint) -> Self {
        Self {
            result,
            reason: reason.into(),
            x_cross: Some(point.x),
            y_cross: Some(point.y),
        }
    }

    /// An UNKNOWN verdict with the given justification
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::new(Verdict::Unknown, reason)
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new(Verdict::Unknown, "")
    }
}

/// One pass/fail criterion from the evaluation objects table
///
/// Carries the raw table row (header-named columns, comma decimals already
/// normalized to points), the numeric boundaries derived from it, and the
/// evaluation outcome. Rows whose reaction column reads `OFF` never become
/// an `EvaluationObject`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationObject {
    /// Criterion identifier (`EO-1`, `EO-02`, ...)
    #[serde(rename = "EO_Identifier")]
    pub identifier: String,

    /// Raw column values keyed by header name, preserved verbatim apart
    /// from comma-to-point normalization
    #[serde(flatten)]
    pub fields: HashMap<String, String>,

    /// Lower X boundary
    #[serde(rename = "XMin_num")]
    pub x_min: Option<f64>,

    /// Upper X boundary
    #[serde(rename = "XMax_num")]
    pub x_max: Option<f64>,

    /// Lower Y boundary
    #[serde(rename = "YMin_num")]
    pub y_min: Option<f64>,

    /// Upper Y boundary
    #[serde(rename = "YMax_num")]
    pub y_max: Option<f64>,

    /// X reference used by LINE-Y
    #[serde(rename = "X_num")]
    pub x_ref: Option<f64>,

    /// Y reference carried for completeness
    #[serde(rename = "Y_num")]
    pub y_ref: Option<f64>,

    /// Verdict and justification, filled by the evaluator
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl EvaluationObject {
    /// The raw reaction marker of this criterion
    pub fn reaction(&self) -> &str {
        self.fields
            .get(REACTION_COLUMN)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Look up a raw column value by header name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

// =============================================================================
// Parsed Report
// =============================================================================

/// The combined, evaluated record of one report export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReport {
    /// Result metadata; the essential keys are always present, defaulted to
    /// `N/A` when absent from the source
    pub result_info: HashMap<String, String>,

    /// Curve-related process values, when the section was present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_values_curve_related: Option<HashMap<String, ProcessValue>>,

    /// Evaluated criteria in table order
    pub evaluation_objects: Vec<EvaluationObject>,

    /// The measured curve shared by all criteria
    pub measuring_curve: MeasuringCurve,
}

impl ParsedReport {
    /// The overall result recorded by the measuring device
    pub fn total_result(&self) -> &str {
        self.result_info
            .get("Total result")
            .map(String::as_str)
            .unwrap_or(crate::constants::MISSING_VALUE)
    }

    /// Count evaluation objects by verdict
    pub fn verdict_count(&self, verdict: Verdict) -> usize {
        self.evaluation_objects
            .iter()
            .filter(|o| o.evaluation.result == verdict)
            .count()
    }
}
