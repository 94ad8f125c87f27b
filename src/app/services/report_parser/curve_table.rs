//! Measuring curve extraction
//!
//! The curve table is located by a byte-offset scan over the whole document:
//! the first `Measuring curve` marker, then the first `s;mm;N;mm` column
//! signature after it. Data rows follow the signature line; field 1 is the
//! displacement and field 2 the force. Rows that fail to parse are skipped,
//! never aborting the remaining rows.

use super::numeric;
use super::stats::ParseStats;
use crate::app::models::MeasuringCurve;
use crate::constants::{CURVE_HEADER_SIGNATURE, FIELD_SEPARATOR, markers};
use tracing::debug;

/// Extract the measured curve from the full document text
///
/// A missing marker or signature yields an empty curve.
pub fn parse(content: &str, stats: &mut ParseStats) -> MeasuringCurve {
    let mut curve = MeasuringCurve::new();

    let Some(marker_offset) = content.find(markers::MEASURING_CURVE) else {
        return curve;
    };
    let Some(signature_offset) = content[marker_offset..].find(CURVE_HEADER_SIGNATURE) else {
        return curve;
    };

    let after_signature = &content[marker_offset + signature_offset..];
    let Some(line_end) = after_signature.find('\n') else {
        return curve;
    };

    for line in after_signature[line_end + 1..].lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).collect();
        if fields.len() < 3 {
            stats.curve_rows_skipped += 1;
            continue;
        }

        match (
            numeric::normalize_decimal(fields[1]),
            numeric::normalize_decimal(fields[2]),
        ) {
            (Some(x), Some(y)) => {
                curve.push_sample(x, y);
                stats.curve_samples += 1;
            }
            _ => {
                debug!("Skipping malformed curve row: {trimmed}");
                stats.curve_rows_skipped += 1;
            }
        }
    }

    curve
}
