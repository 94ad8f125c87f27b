//! Process value table parsing
//!
//! Two tables carry process values. The curve-related table lays out up to
//! two name/value/unit triples side by side per row. The EO-related table is
//! a conventional header+rows table from which only the `Entry` value of the
//! first evaluation object is consumed, merged into the result metadata.

use super::numeric;
use crate::app::models::ProcessValue;
use crate::constants::{ENTRY_COLUMN, ENTRY_OBJECT_ID, FIELD_SEPARATOR};
use std::collections::HashMap;

/// Parse the curve-related process values block
///
/// Each row carries up to two name/value/unit triples: fields 0-2 and
/// fields 3-5. Triples with an empty name cell are skipped.
pub fn parse_curve_related(lines: &[&str]) -> HashMap<String, ProcessValue> {
    let mut values = HashMap::new();

    for line in lines {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

        if fields.len() >= 3 && !fields[0].is_empty() {
            values.insert(fields[0].to_string(), join_value_unit(fields[1], fields[2]));
        }
        if fields.len() >= 6 && !fields[3].is_empty() {
            values.insert(fields[3].to_string(), join_value_unit(fields[4], fields[5]));
        }
    }

    values
}

fn join_value_unit(value: &str, unit: &str) -> ProcessValue {
    if unit.is_empty() {
        numeric::parse_value_unit(value)
    } else {
        numeric::parse_value_unit(&format!("{value} {unit}"))
    }
}

/// Look up the `Entry` process value recorded for the first evaluation
/// object in the EO-related block
///
/// The block's first line is its column header; data rows are keyed by the
/// EO identifier in the first field. The returned value is comma-to-point
/// normalized but otherwise verbatim. `None` when the block is too short,
/// the `Entry` column is missing, or the row carries no value.
pub fn extract_entry(lines: &[&str]) -> Option<String> {
    if lines.len() < 2 {
        return None;
    }

    let headers: Vec<&str> = lines[0].split(FIELD_SEPARATOR).map(str::trim).collect();
    let entry_index = headers.iter().position(|h| *h == ENTRY_COLUMN)?;

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.first() == Some(&ENTRY_OBJECT_ID) {
            let raw = fields.get(entry_index).copied().unwrap_or("");
            if raw.is_empty() {
                return None;
            }
            return Some(raw.replace(',', "."));
        }
    }

    None
}
