//! Report parsing orchestration
//!
//! Runs section extraction and the per-section block parsers, then judges
//! every surviving evaluation object against the shared measuring curve.
//! The parse itself is pure: identical input text yields structurally
//! identical output. Reading the input file is the only hard failure.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use super::stats::ParseStats;
use super::{curve_table, evaluation_table, key_value, process_values, section};
use crate::app::models::{EvaluationObject, ParsedReport, ProcessValue};
use crate::app::services::curve_evaluator;
use crate::constants::{ENTRY_COLUMN, ESSENTIAL_RESULT_KEYS, MISSING_VALUE};
use crate::{Error, Result};

/// Parser for Kistler force/displacement report exports
///
/// The parser holds no state; every call builds its record from scratch.
/// Absent sections degrade to empty or defaulted output, malformed rows are
/// skipped, and partial successes are preserved: a section that yields
/// nothing never discards data extracted from other sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportParser;

/// Parsed report plus parsing statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The combined, evaluated record
    pub report: ParsedReport,

    /// Counters describing how much of the document survived
    pub stats: ParseStats,
}

impl ReportParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a report file
    ///
    /// An unreadable file is the only hard failure; everything inside the
    /// document degrades per section.
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        info!("Parsing report file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::input_read(path.display().to_string(), e))?;

        Ok(self.parse_str(&content))
    }

    /// Parse a report document already held in memory
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let mut stats = ParseStats::new();
        let lines: Vec<&str> = content.lines().collect();

        let result_info = self.parse_result_info(&lines, &mut stats);
        let process_values_curve_related = self.parse_curve_process_values(&lines, &mut stats);
        let mut evaluation_objects = self.parse_evaluation_objects(&lines, &mut stats);
        let measuring_curve = curve_table::parse(content, &mut stats);

        for object in &mut evaluation_objects {
            let evaluation = curve_evaluator::evaluate(object, &measuring_curve);
            object.evaluation = evaluation;
            stats.objects_evaluated += 1;
        }

        debug!(
            "Parsed report: {} sections, {} criteria, {} curve samples",
            stats.sections_found,
            evaluation_objects.len(),
            measuring_curve.len()
        );

        ParseOutcome {
            report: ParsedReport {
                result_info,
                process_values_curve_related,
                evaluation_objects,
                measuring_curve,
            },
            stats,
        }
    }

    /// Parse the result metadata block and merge the `Entry` process value
    fn parse_result_info(&self, lines: &[&str], stats: &mut ParseStats) -> HashMap<String, String> {
        let mut info = match section::extract(lines, &section::RESULT_INFORMATION) {
            Some(slice) => {
                stats.sections_found += 1;
                key_value::parse_block(slice.body)
            }
            None => {
                warn!("Result information section not found");
                HashMap::new()
            }
        };

        for key in ESSENTIAL_RESULT_KEYS {
            info.entry((*key).to_string())
                .or_insert_with(|| MISSING_VALUE.to_string());
        }

        let entry = match section::extract(lines, &section::PROCESS_VALUES_EO) {
            Some(slice) => {
                stats.sections_found += 1;
                process_values::extract_entry(slice.body)
            }
            None => None,
        };
        info.insert(
            ENTRY_COLUMN.to_string(),
            entry.unwrap_or_else(|| MISSING_VALUE.to_string()),
        );

        info
    }

    /// Parse the curve-related process values table, when present
    fn parse_curve_process_values(
        &self,
        lines: &[&str],
        stats: &mut ParseStats,
    ) -> Option<HashMap<String, ProcessValue>> {
        let slice = section::extract(lines, &section::PROCESS_VALUES_CURVE)?;
        stats.sections_found += 1;
        Some(process_values::parse_curve_related(slice.body))
    }

    /// Parse the evaluation criteria table, when present
    fn parse_evaluation_objects(
        &self,
        lines: &[&str],
        stats: &mut ParseStats,
    ) -> Vec<EvaluationObject> {
        match section::extract(lines, &section::EVALUATION_OBJECTS) {
            Some(slice) => {
                stats.sections_found += 1;
                evaluation_table::parse(slice.marker_line, slice.body, stats)
            }
            None => {
                warn!("Evaluation objects section not found");
                Vec::new()
            }
        }
    }
}
