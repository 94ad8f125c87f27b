//! Parse command implementation
//!
//! Evaluates a single report export and renders the result either as a
//! human-readable verdict table or as the JSON record.

use super::shared::{ProcessingStats, setup_logging};
use crate::app::models::{ParsedReport, Verdict};
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::constants::ESSENTIAL_RESULT_KEYS;
use crate::{Error, Result};
use colored::{ColoredString, Colorize};
use std::time::Instant;
use tracing::{debug, info};

/// Parse command runner
pub async fn run_parse(args: ParseArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let parser = ReportParser::new();
    let outcome = parser.parse_file(&args.input)?;

    info!(
        "Parsed {} criteria and {} curve samples from {}",
        outcome.report.evaluation_objects.len(),
        outcome.report.measuring_curve.len(),
        args.input.display()
    );

    let rendered = match args.output_format {
        OutputFormat::Json => render_json(&outcome.report, args.pretty)?,
        OutputFormat::Human => render_human(&outcome.report),
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| Error::output_write(path.display().to_string(), e))?;
            info!("Wrote evaluated record to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    let mut stats = ProcessingStats {
        files_processed: 1,
        ..Default::default()
    };
    stats.record_report(&outcome.report);
    stats.processing_time = start_time.elapsed();

    Ok(stats)
}

/// Serialize the evaluated record as JSON
fn render_json(report: &ParsedReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Render the evaluated record as a verdict table
fn render_human(report: &ParsedReport) -> String {
    let mut out = String::new();

    for key in ESSENTIAL_RESULT_KEYS {
        let value = report
            .result_info
            .get(*key)
            .map(String::as_str)
            .unwrap_or_default();
        if *key == "Total result" {
            out.push_str(&format!("{:<24} {}\n", format!("{key}:"), colorize(value)));
        } else {
            out.push_str(&format!("{:<24} {}\n", format!("{key}:"), value));
        }
    }
    out.push_str(&format!(
        "{:<24} {} samples\n",
        "Measuring curve:",
        report.measuring_curve.len()
    ));

    if report.evaluation_objects.is_empty() {
        out.push_str("\nNo evaluation objects configured.\n");
        return out;
    }

    out.push_str("\nEvaluation objects:\n");
    for object in &report.evaluation_objects {
        let verdict = object.evaluation.result;
        let crossing = match (object.evaluation.x_cross, object.evaluation.y_cross) {
            (Some(x), Some(y)) => format!(" at ({x}, {y})"),
            _ => String::new(),
        };
        out.push_str(&format!(
            "  {:<8} {:<12} {:<18} {}{}\n",
            object.identifier,
            object.reaction(),
            colorize(verdict.as_str()),
            object.evaluation.reason,
            crossing
        ));
    }

    out
}

fn colorize(value: &str) -> ColoredString {
    match value {
        v if v == Verdict::Ok.as_str() => v.green().bold(),
        v if v == Verdict::Nok.as_str() || v == Verdict::NokOutOfRange.as_str() => v.red().bold(),
        v if v == Verdict::Unknown.as_str() => v.yellow(),
        v => v.normal(),
    }
}
