//! Parser for Kistler force/displacement report exports
//!
//! This module turns the semicolon-delimited, multi-section report text into
//! a typed, evaluated record. The format tolerates a lot: sections may be
//! absent, rows may be malformed, and numeric fields mix comma and point
//! decimal separators. Everything that can degrade gracefully does; only an
//! unreadable input file is a hard failure.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Orchestration: section extraction, assembly, evaluation
//! - [`section`] - Generic marker-table-driven section location
//! - [`key_value`] - "key;value" block parsing (Result information)
//! - [`process_values`] - Process value tables (curve related / EO related)
//! - [`evaluation_table`] - Evaluation criteria table parsing
//! - [`curve_table`] - Measuring curve extraction
//! - [`numeric`] - Locale-mixed numeric token normalization
//! - [`stats`] - Parsing statistics
//!
//! ## Usage
//!
//! ```rust
//! use kistler_processor::ReportParser;
//!
//! let text = "Result information\nDate;24.06.2025\n";
//! let outcome = ReportParser::new().parse_str(text);
//!
//! assert_eq!(outcome.report.result_info["Date"], "24.06.2025");
//! assert!(outcome.report.measuring_curve.is_empty());
//! ```

pub mod curve_table;
pub mod evaluation_table;
pub mod key_value;
pub mod numeric;
pub mod parser;
pub mod process_values;
pub mod section;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{ParseOutcome, ReportParser};
pub use section::{SectionSlice, SectionSpec};
pub use stats::ParseStats;
