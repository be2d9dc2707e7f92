//! Command-line argument definitions for the Tapeline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments describe the tape snapshot and control padding,
//! configuration file selection, output delivery and logging verbosity.

use clap::Parser;

/// Render a tape snapshot as a LaTeX diagram, print it and append it to the clipboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the machine state shown above the tape
    pub label: String,

    /// Tape cells, left to right (use `--` before cells that look like flags)
    #[arg(allow_hyphen_values = true)]
    pub cells: Vec<String>,

    /// Index of the current cell
    #[arg(short = 'p', long, default_value_t = 0, allow_negative_numbers = true)]
    pub head: i64,

    /// Minimum number of tape cells before the ellipsis cells [default: from config, 21]
    #[arg(short, long, allow_negative_numbers = true)]
    pub min_length: Option<i64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also write the diagram to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Do not touch the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Keep existing clipboard contents and append the diagram after them
    #[arg(long)]
    pub append: bool,

    /// Keep running until another program takes over the clipboard (X11/Wayland)
    #[arg(long)]
    pub wait: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
