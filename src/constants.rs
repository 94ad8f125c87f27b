//! Application constants for the Kistler report processor
//!
//! This module contains the section marker vocabulary of the report export
//! format, the column names the parser and evaluator rely on, and default
//! values used by the processing shell.

// =============================================================================
// Section Markers
// =============================================================================

/// Literal marker lines that open (or terminate) named report sections
pub mod markers {
    /// Opens the result metadata block
    pub const RESULT_INFORMATION: &str = "Result information";

    /// Opens the curve-related process values table
    pub const PROCESS_VALUES_CURVE: &str = "Process values - curve related";

    /// Opens the EO-related process values table
    pub const PROCESS_VALUES_EO: &str = "Process values - EO related";

    /// Opens the evaluation criteria table; this line doubles as the
    /// table's column header row
    pub const EVALUATION_OBJECTS: &str = "Evaluation objects settings";

    /// Sections that may follow the evaluation criteria table
    pub const SWITCH_SIGNALS: &str = "Switch signal settings";
    pub const DEVICE_INFORMATION: &str = "Device information";

    /// Opens the measuring curve block
    pub const MEASURING_CURVE: &str = "Measuring curve";
}

/// Column signature identifying the curve data table header
pub const CURVE_HEADER_SIGNATURE: &str = "s;mm;N;mm";

/// Field separator used throughout the tabular sections
pub const FIELD_SEPARATOR: char = ';';

// =============================================================================
// Result Information
// =============================================================================

/// Sentinel for values absent from the source document
pub const MISSING_VALUE: &str = "N/A";

/// Keys guaranteed to be present in the result information map
pub const ESSENTIAL_RESULT_KEYS: &[&str] = &[
    "Date",
    "Time",
    "Total result",
    "Part serial number",
    "Measuring program name",
];

/// Column of the EO-related process values table merged into result info
pub const ENTRY_COLUMN: &str = "Entry";

/// Evaluation object whose row supplies the `Entry` process value
pub const ENTRY_OBJECT_ID: &str = "EO-01";

// =============================================================================
// Evaluation Objects
// =============================================================================

/// Identifier prefix marking a criterion row in the evaluation table
pub const EO_IDENTIFIER_PREFIX: &str = "EO-";

/// Column holding the criterion's reaction type
pub const REACTION_COLUMN: &str = "Reaction";

/// Reaction value marking a disabled criterion row
pub const REACTION_OFF: &str = "OFF";

/// Boundary column names of the evaluation criteria table
pub mod columns {
    pub const X_MIN: &str = "XMin";
    pub const X_MAX: &str = "XMax";
    pub const Y_MIN: &str = "YMin";
    pub const Y_MAX: &str = "YMax";
    pub const X_REFERENCE: &str = "X-Reference";
    pub const Y_REFERENCE: &str = "Y-Reference";
}

/// Absolute tolerance for matching a curve sample to a LINE-Y X reference
pub const X_REF_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Shell Defaults
// =============================================================================

/// Maximum report size accepted by the batch shell, in bytes
pub const DEFAULT_MAX_REPORT_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// Maximum number of parallel workers the batch shell accepts
pub const MAX_PARALLEL_WORKERS: usize = 100;

/// File extensions recognized as report exports during discovery
pub const REPORT_FILE_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Check if a file extension belongs to a report export
pub fn is_report_extension(extension: &str) -> bool {
    REPORT_FILE_EXTENSIONS
        .iter()
        .any(|e| extension.eq_ignore_ascii_case(e))
}
