//! Evaluation criteria table parsing
//!
//! The table's header is the section marker line itself: `Evaluation objects
//! settings;Reaction;XMin;...`. Rows are keyed by an `EO-` prefixed
//! identifier in the first field; rows whose reaction column reads `OFF` are
//! disabled criteria and never enter the result. Everything that does not
//! qualify is dropped silently and only counted in the statistics.

use super::numeric;
use super::stats::ParseStats;
use crate::app::models::{Evaluation, EvaluationObject};
use crate::constants::{
    EO_IDENTIFIER_PREFIX, FIELD_SEPARATOR, REACTION_COLUMN, REACTION_OFF, columns,
};
use std::collections::HashMap;
use tracing::debug;

/// Parse the criteria table into evaluation objects
///
/// `header_line` is the section marker line; its cells (empty ones dropped,
/// order preserved) name the columns. Each header is paired with the row
/// field at its position in the filtered header list.
pub fn parse(header_line: &str, lines: &[&str], stats: &mut ParseStats) -> Vec<EvaluationObject> {
    let headers: Vec<String> = header_line
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect();
    let reaction_index = headers.iter().position(|h| h == REACTION_COLUMN);

    let mut objects = Vec::new();

    for line in lines {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        stats.criterion_rows_seen += 1;

        if fields.len() < 2 || !fields[0].starts_with(EO_IDENTIFIER_PREFIX) {
            stats.criterion_rows_dropped += 1;
            continue;
        }

        let reaction = reaction_index
            .and_then(|index| fields.get(index).copied())
            .unwrap_or("");
        if reaction == REACTION_OFF {
            debug!("Skipping disabled criterion row {}", fields[0]);
            stats.criterion_rows_dropped += 1;
            continue;
        }

        objects.push(build_object(&headers, &fields));
    }

    objects
}

/// Convert one qualifying row into an evaluation object
fn build_object(headers: &[String], fields: &[&str]) -> EvaluationObject {
    let mut raw = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        if let Some(value) = fields.get(index) {
            let normalized = if value.contains(',') {
                value.replace(',', ".")
            } else {
                (*value).to_string()
            };
            raw.insert(header.clone(), normalized);
        }
    }

    EvaluationObject {
        identifier: fields[0].to_string(),
        x_min: boundary(&raw, columns::X_MIN),
        x_max: boundary(&raw, columns::X_MAX),
        y_min: boundary(&raw, columns::Y_MIN),
        y_max: boundary(&raw, columns::Y_MAX),
        x_ref: boundary(&raw, columns::X_REFERENCE),
        y_ref: boundary(&raw, columns::Y_REFERENCE),
        fields: raw,
        evaluation: Evaluation::default(),
    }
}

fn boundary(fields: &HashMap<String, String>, column: &str) -> Option<f64> {
    fields.get(column).and_then(|v| numeric::normalize_decimal(v))
}
