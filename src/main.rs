use clap::Parser;
use kistler_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Kistler Processor - Force/Displacement Report Evaluator");
    println!("=======================================================");
    println!();
    println!("Parse Kistler force/displacement test report exports and evaluate");
    println!("every configured pass/fail criterion against the measured curve.");
    println!();
    println!("USAGE:");
    println!("    kistler_processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a single report export and print the evaluated record");
    println!("    batch       Parse every report export under a directory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Evaluate a single report, human-readable verdict table:");
    println!("    kistler_processor parse report.csv");
    println!();
    println!("    # Emit the JSON record instead:");
    println!("    kistler_processor parse report.csv --format json --pretty");
    println!();
    println!("    # Evaluate every export under a directory with 8 workers:");
    println!("    kistler_processor batch exports/ --output results/ --workers 8");
    println!();
    println!("For detailed help on any command, use:");
    println!("    kistler_processor <COMMAND> --help");
}
