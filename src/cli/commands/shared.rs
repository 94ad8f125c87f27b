//! Shared components for CLI commands
//!
//! Common types, logging setup, progress reporting, and report file
//! discovery used across the command implementations.

use crate::app::models::{ParsedReport, Verdict};
use crate::constants::is_report_extension;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of report files processed
    pub files_processed: usize,
    /// Number of evaluation objects judged
    pub objects_evaluated: usize,
    /// Objects with an OK verdict
    pub objects_passed: usize,
    /// Objects with a NOK or NOK_OUT_OF_RANGE verdict
    pub objects_failed: usize,
    /// Objects that could not be judged
    pub objects_unknown: usize,
    /// Number of files that failed to process
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// Tally the verdicts of one parsed report
    pub fn record_report(&mut self, report: &ParsedReport) {
        for object in &report.evaluation_objects {
            self.objects_evaluated += 1;
            match object.evaluation.result {
                Verdict::Ok => self.objects_passed += 1,
                Verdict::Nok | Verdict::NokOutOfRange => self.objects_failed += 1,
                Verdict::Unknown => self.objects_unknown += 1,
            }
        }
    }

    /// Fraction of judged objects that passed, as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.objects_evaluated == 0 {
            0.0
        } else {
            (self.objects_passed as f64 / self.objects_evaluated as f64) * 100.0
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kistler_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover report export files under a directory
///
/// Walks the tree without following symlinks and collects files with a
/// recognized report extension, sorted for deterministic processing order.
pub fn discover_report_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    if !input_dir.exists() {
        return Err(Error::configuration(format!(
            "Input directory does not exist: {}",
            input_dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(is_report_extension)
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Check if an error is critical enough to stop a batch run
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::ProcessingInterrupted { .. }
    )
}

/// Create a styled progress bar for batch processing
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Evaluation, EvaluationObject, MeasuringCurve};
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn report_with_verdicts(verdicts: &[Verdict]) -> ParsedReport {
        let objects = verdicts
            .iter()
            .enumerate()
            .map(|(i, &verdict)| EvaluationObject {
                identifier: format!("EO-{:02}", i + 1),
                fields: HashMap::new(),
                x_min: None,
                x_max: None,
                y_min: None,
                y_max: None,
                x_ref: None,
                y_ref: None,
                evaluation: Evaluation::new(verdict, ""),
            })
            .collect();

        ParsedReport {
            result_info: HashMap::new(),
            process_values_curve_related: None,
            evaluation_objects: objects,
            measuring_curve: MeasuringCurve::new(),
        }
    }

    #[test]
    fn test_stats_tally_verdicts() {
        let mut stats = ProcessingStats::default();
        stats.record_report(&report_with_verdicts(&[
            Verdict::Ok,
            Verdict::Ok,
            Verdict::Nok,
            Verdict::NokOutOfRange,
            Verdict::Unknown,
        ]));

        assert_eq!(stats.objects_evaluated, 5);
        assert_eq!(stats.objects_passed, 2);
        assert_eq!(stats.objects_failed, 2);
        assert_eq!(stats.objects_unknown, 1);
        assert_eq!(stats.pass_rate(), 40.0);
    }

    #[test]
    fn test_pass_rate_with_no_objects() {
        let stats = ProcessingStats::default();
        assert_eq!(stats.pass_rate(), 0.0);
    }

    #[test]
    fn test_discover_report_files() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        std::fs::write(temp_dir.path().join("a.csv"), "x").unwrap();
        std::fs::write(nested.join("b.TXT"), "x").unwrap();
        std::fs::write(temp_dir.path().join("ignored.json"), "x").unwrap();

        let files = discover_report_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.csv"));
        assert!(files[1].ends_with("b.TXT"));
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(discover_report_files(&missing).is_err());
    }

    #[test]
    fn test_critical_error_classification() {
        assert!(is_critical_error(&Error::configuration("bad")));
        assert!(is_critical_error(&Error::processing_interrupted("stop")));
        assert!(!is_critical_error(&Error::data_validation("row")));
    }
}
