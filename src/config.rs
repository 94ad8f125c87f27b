//! Configuration for the processing shell.
//!
//! Holds the knobs of the I/O shell around the core parser: worker counts,
//! input size limits, and output rendering. The core parser and evaluator
//! never read this configuration; they are pure functions over the report
//! text.

use crate::constants::{DEFAULT_MAX_REPORT_SIZE_BYTES, MAX_PARALLEL_WORKERS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shell configuration for report processing runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Number of reports processed concurrently by the batch command
    pub workers: usize,

    /// Maximum accepted report file size in bytes
    pub max_report_size_bytes: u64,

    /// Pretty-print generated JSON records
    pub pretty_json: bool,

    /// Show progress bars during batch runs
    pub show_progress: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            max_report_size_bytes: DEFAULT_MAX_REPORT_SIZE_BYTES,
            pretty_json: false,
            show_progress: true,
        }
    }
}

impl ProcessorConfig {
    /// Create configuration with a custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Create configuration with a custom report size limit
    pub fn with_max_report_size(mut self, bytes: u64) -> Self {
        self.max_report_size_bytes = bytes;
        self
    }

    /// Enable pretty-printed JSON output
    pub fn with_pretty_json(mut self) -> Self {
        self.pretty_json = true;
        self
    }

    /// Disable progress reporting
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }

        if self.workers > MAX_PARALLEL_WORKERS {
            return Err(Error::configuration(format!(
                "Number of workers cannot exceed {}",
                MAX_PARALLEL_WORKERS
            )));
        }

        if self.max_report_size_bytes == 0 {
            return Err(Error::configuration(
                "Maximum report size must be greater than 0 bytes".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.workers > 0);
        assert_eq!(config.max_report_size_bytes, DEFAULT_MAX_REPORT_SIZE_BYTES);
    }

    #[test]
    fn test_builder_methods() {
        let config = ProcessorConfig::default()
            .with_workers(4)
            .with_max_report_size(1024)
            .with_pretty_json()
            .without_progress();

        assert_eq!(config.workers, 4);
        assert_eq!(config.max_report_size_bytes, 1024);
        assert!(config.pretty_json);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(
            ProcessorConfig::default()
                .with_workers(0)
                .validate()
                .is_err()
        );
        assert!(
            ProcessorConfig::default()
                .with_workers(MAX_PARALLEL_WORKERS + 1)
                .validate()
                .is_err()
        );
        assert!(
            ProcessorConfig::default()
                .with_max_report_size(0)
                .validate()
                .is_err()
        );
    }
}
