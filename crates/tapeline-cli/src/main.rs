//! Tapeline CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use tapeline_cli::{Args, error_adapter::render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Tapeline");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = tapeline_cli::run(&args) {
        // The report is user-facing output, independent of --log-level
        eprintln!("{}", render_report(&err));
        debug!(err:?; "Run failed");
        process::exit(1);
    }

    info!("Completed successfully");
}
