//! Command implementations for the Kistler report processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod batch;
pub mod parse;
pub mod shared;

// Re-export the main types for easy access
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the report processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `parse`: single report evaluation with human or JSON output
/// - `batch`: parallel evaluation of every report under a directory
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args).await,
        Commands::Batch(batch_args) => batch::run_batch(batch_args).await,
    }
}
