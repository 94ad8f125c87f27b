//! Batch command implementation
//!
//! Evaluates every report export under a directory. Files are independent,
//! so they are processed concurrently: one blocking task per report, capped
//! by the configured worker count. Each report produces one JSON record in
//! the output directory; failures are logged and counted without stopping
//! the run.

use super::shared::{
    ProcessingStats, create_progress_bar, discover_report_files, is_critical_error, setup_logging,
};
use crate::app::services::report_parser::{ParseOutcome, ReportParser};
use crate::cli::args::BatchArgs;
use crate::config::ProcessorConfig;
use crate::{Error, Result};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

/// Batch command runner
pub async fn run_batch(args: BatchArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let mut config = ProcessorConfig::default()
        .with_workers(args.effective_workers())
        .with_max_report_size(args.max_size);
    if args.pretty {
        config = config.with_pretty_json();
    }
    if !args.show_progress() {
        config = config.without_progress();
    }
    config.validate()?;

    let files = discover_report_files(&args.input_dir)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No report exports found in {}",
            args.input_dir.display()
        )));
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join("evaluated"));
    std::fs::create_dir_all(&output_dir)
        .map_err(|e| Error::output_write(output_dir.display().to_string(), e))?;

    info!(
        "Processing {} report files with {} workers into {}",
        files.len(),
        config.workers,
        output_dir.display()
    );

    let progress = if config.show_progress {
        Some(create_progress_bar(
            files.len() as u64,
            "Evaluating report exports",
        ))
    } else {
        None
    };

    let mut stats = ProcessingStats::default();
    let mut results = stream::iter(files.into_iter())
        .map(|path| {
            let output_dir = output_dir.clone();
            let config = config.clone();
            tokio::task::spawn_blocking(move || {
                let result = process_report(&path, &output_dir, &config);
                (path, result)
            })
        })
        .buffer_unordered(config.workers);

    while let Some(joined) = results.next().await {
        match joined {
            Ok((path, Ok(outcome))) => {
                stats.files_processed += 1;
                stats.record_report(&outcome.report);
                debug!(
                    "Evaluated {}: {} criteria, {} curve samples",
                    path.display(),
                    outcome.report.evaluation_objects.len(),
                    outcome.report.measuring_curve.len()
                );
            }
            Ok((path, Err(e))) => {
                error!("Failed to process {}: {}", path.display(), e);
                stats.errors_encountered += 1;
                if is_critical_error(&e) {
                    return Err(e);
                }
            }
            Err(e) => {
                error!("Worker task failed: {e}");
                stats.errors_encountered += 1;
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();
    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Process one report: size check, parse, evaluate, write the JSON record
fn process_report(path: &Path, output_dir: &Path, config: &ProcessorConfig) -> Result<ParseOutcome> {
    let metadata =
        std::fs::metadata(path).map_err(|e| Error::input_read(path.display().to_string(), e))?;
    if metadata.len() > config.max_report_size_bytes {
        return Err(Error::data_validation(format!(
            "Report {} exceeds maximum size of {} bytes",
            path.display(),
            config.max_report_size_bytes
        )));
    }

    let parser = ReportParser::new();
    let outcome = parser.parse_file(path)?;

    let output_path = output_dir.join(output_file_name(path));
    let json = if config.pretty_json {
        serde_json::to_string_pretty(&outcome.report)?
    } else {
        serde_json::to_string(&outcome.report)?
    };
    std::fs::write(&output_path, json)
        .map_err(|e| Error::output_write(output_path.display().to_string(), e))?;

    Ok(outcome)
}

/// Derive the JSON record filename from the report filename
fn output_file_name(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    PathBuf::from(format!("{stem}.json"))
}

/// Print the batch summary to stdout
fn print_summary(stats: &ProcessingStats) {
    println!();
    println!("Batch evaluation complete in {}", HumanDuration(stats.processing_time));
    println!("  Files processed:    {}", stats.files_processed);
    println!("  Criteria evaluated: {}", stats.objects_evaluated);
    println!(
        "  Verdicts:           {} / {} / {}",
        format!("{} OK", stats.objects_passed).green(),
        format!("{} NOK", stats.objects_failed).red(),
        format!("{} UNKNOWN", stats.objects_unknown).yellow()
    );
    if stats.errors_encountered > 0 {
        println!(
            "  Errors:             {}",
            format!("{}", stats.errors_encountered).red().bold()
        );
    }
}
