//! Parsing statistics for report processing
//!
//! Tracks how much of a report survived parsing: sections located, criterion
//! rows kept or dropped, and curve samples accepted. Tolerated degradation
//! (absent sections, malformed rows) is visible here instead of in errors.

use serde::{Deserialize, Serialize};

/// Counters collected during one parse call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Named sections located in the document
    pub sections_found: usize,

    /// Rows encountered in the evaluation criteria table
    pub criterion_rows_seen: usize,

    /// Criteria rows dropped (disabled, malformed, or non-criterion lines)
    pub criterion_rows_dropped: usize,

    /// Curve samples accepted into the measuring curve
    pub curve_samples: usize,

    /// Curve rows skipped due to parse failures or missing fields
    pub curve_rows_skipped: usize,

    /// Evaluation objects judged against the curve
    pub objects_evaluated: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Criterion rows that became evaluation objects
    pub fn criterion_rows_kept(&self) -> usize {
        self.criterion_rows_seen
            .saturating_sub(self.criterion_rows_dropped)
    }

    /// Fraction of curve rows that parsed, as a percentage
    pub fn curve_acceptance_rate(&self) -> f64 {
        let total = self.curve_samples + self.curve_rows_skipped;
        if total == 0 {
            0.0
        } else {
            (self.curve_samples as f64 / total as f64) * 100.0
        }
    }
}
