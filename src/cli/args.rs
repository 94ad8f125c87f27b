//! Command-line argument definitions for the Kistler report processor
//!
//! Defines the complete CLI interface using the clap derive API: a `parse`
//! command for single report exports and a `batch` command for directories
//! of them.

use crate::constants::{DEFAULT_MAX_REPORT_SIZE_BYTES, MAX_PARALLEL_WORKERS};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Kistler report processor
///
/// Parses Kistler force/displacement test report exports and evaluates each
/// configured pass/fail criterion against the measured curve.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kistler-processor",
    version,
    about = "Parse and evaluate Kistler force/displacement test report exports",
    long_about = "Parses the semicolon-delimited, multi-section report exports produced by \
                  Kistler force/displacement measurement systems, evaluates every configured \
                  pass/fail criterion (LINE-X, NO-PASS, LINE-Y, MIN-MAX/LIMIT-RANGE) against \
                  the measured curve, and emits the evaluated record as a human-readable \
                  verdict table or as JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the report processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a single report export and print the evaluated record
    Parse(ParseArgs),
    /// Parse every report export under a directory
    Batch(BatchArgs),
}

/// Arguments for the parse command (single report)
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Report export file to parse
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format for the evaluated record
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the evaluated record"
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty", help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Write output to a file instead of stdout"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the batch command (directory of reports)
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Directory containing report exports
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Output directory for the generated JSON records
    ///
    /// Defaults to an `evaluated/` directory inside the input directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated JSON records"
    )]
    pub output_dir: Option<PathBuf>,

    /// Number of parallel workers
    ///
    /// Controls how many reports are processed concurrently. Zero selects
    /// one worker per CPU core.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = 0,
        help = "Number of parallel workers (0 = one per CPU core)"
    )]
    pub workers: usize,

    /// Maximum report file size accepted, in bytes
    #[arg(
        long = "max-size",
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_REPORT_SIZE_BYTES,
        help = "Maximum report file size accepted, in bytes"
    )]
    pub max_size: u64,

    /// Pretty-print the generated JSON records
    #[arg(long = "pretty", help = "Pretty-print the generated JSON records")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the parse command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable verdict table
    Human,
    /// JSON record for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl BatchArgs {
    /// Validate the batch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_dir.display()
            )));
        }

        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_dir.display()
            )));
        }

        if self.workers > MAX_PARALLEL_WORKERS {
            return Err(Error::configuration(format!(
                "Number of workers cannot exceed {}",
                MAX_PARALLEL_WORKERS
            )));
        }

        if self.max_size == 0 {
            return Err(Error::configuration(
                "Maximum report size must be greater than 0 bytes".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the effective worker count (0 selects one per CPU core)
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if progress bars should be shown (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
