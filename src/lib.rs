//! Kistler Report Processor Library
//!
//! A Rust library for parsing Kistler force/displacement test report exports
//! and evaluating their pass/fail criteria against the measured curve.
//!
//! This library provides tools for:
//! - Parsing the semicolon-delimited, multi-section report format with proper
//!   handling of locale-mixed (comma/point) decimal separators
//! - Extracting result metadata, process values, evaluation criteria, and the
//!   measured force/displacement curve into typed records
//! - Judging each evaluation object with its configured geometric rule
//!   (LINE-X, NO-PASS, LINE-Y, MIN-MAX/LIMIT-RANGE)
//! - Graceful degradation: absent sections and malformed rows are tolerated,
//!   only an unreadable input aborts a parse

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod curve_evaluator;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{EvaluationObject, MeasuringCurve, ParsedReport, Verdict};
pub use app::services::report_parser::{ParseOutcome, ReportParser};
pub use config::ProcessorConfig;

/// Result type alias for the Kistler processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for report processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be read
    #[error("Failed to read report '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write output '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an input read error
    pub fn input_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
