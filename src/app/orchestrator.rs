//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging (unless quiet).
//! 2. Validates the input path.
//! 3. Loads the graph.
//! 4. Delegates analysis, traversal and verification to `processing::find_path`.
//! 5. Prints the path, or `No Eulerian path.`, to stdout.
//!
//! A graph without an Eulerian path is a normal outcome; only malformed
//! input, I/O failures and broken invariants end in an `AppError`.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for an unreadable or malformed graph file, a failed
/// verification, or a traversal that broke its invariant.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The run continues without a log file.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_pipeline(&cli, quiet_mode);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_pipeline(cli: &Cli, quiet_mode: bool) -> Result<(), AppError> {
    let graph_file = file_handler::validate_graph_file(&cli.graph_file, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing Graph: {}", graph_file);
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let graph = processing::load_graph(graph_file, quiet_mode)?;
    let trail = processing::find_path(&graph, cli.verify, quiet_mode)?;

    match trail {
        Some(trail) if trail.is_empty() => println!("Empty path (graph has no edges)."),
        Some(trail) => {
            println!("{}", trail);
            if cli.verify && !quiet_mode {
                println!("Verified: every edge used exactly once.");
            }
        }
        None => println!("No Eulerian path."),
    }

    if !quiet_mode {
        println!(
            "\nSee '{}' for the step-by-step analysis.",
            cli.log_file.display()
        );
    }
    Ok(())
}
