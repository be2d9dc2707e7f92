//! Tapeline CLI library
//!
//! This module contains the core CLI logic for the Tapeline diagram tool.

pub mod clipboard;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs::File, io};

use log::{debug, info};

use tapeline::{
    ContractViolation, DiagramBuilder, TapelineError,
    config::{AppConfig, OutputConfig},
    sink::{ClearableSink, DiagramSink, SinkError, WriterSink},
};

use clipboard::ClipboardSink;

/// Run the Tapeline CLI application
///
/// Renders the tape described by `args`, prints it to standard output and
/// delivers it to the optional output file and the system clipboard.
///
/// # Errors
///
/// Returns `TapelineError` for:
/// - Configuration loading errors
/// - Contract violations (negative or out-of-range head, negative minimum length)
/// - File I/O errors
/// - An unavailable clipboard
pub fn run(args: &Args) -> Result<(), TapelineError> {
    let mut stdout = WriterSink::new(io::stdout().lock());
    run_with_sinks(args, &mut stdout, |output| ClipboardSink::open(output.wait()))
}

/// Run the CLI with `stdout` standing in for standard output and
/// `open_clipboard` providing the clipboard.
///
/// Every input is validated before anything is written, so a contract
/// violation leaves `stdout`, the output file and the clipboard untouched.
/// `open_clipboard` is only called when the clipboard is enabled, after the
/// diagram has been printed. Unless appending, the clipboard is cleared
/// before the diagram is added.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_sinks<C, F>(
    args: &Args,
    stdout: &mut impl DiagramSink,
    open_clipboard: F,
) -> Result<(), TapelineError>
where
    C: ClearableSink,
    F: FnOnce(&OutputConfig) -> Result<C, SinkError>,
{
    info!(
        state_label = args.label,
        cells = args.cells.len();
        "Processing tape"
    );

    let app_config = resolve_config(args)?;
    let head = ContractViolation::check_head(args.head)?;

    let output = app_config.output().clone();
    debug!(
        clipboard = output.clipboard(),
        append = output.append(),
        wait = output.wait();
        "Resolved output options"
    );

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.build(args.label.as_str(), args.cells.iter().cloned(), head)?;
    let latex = builder.render_latex(&diagram);

    // Printed like a line of output; files and the clipboard get the bare diagram
    stdout.accept(&format!("{latex}\n"))?;

    if let Some(path) = &args.output {
        WriterSink::new(File::create(path)?).accept(&latex)?;
        info!(output_file = path.as_str(); "Diagram written to file");
    }

    if output.clipboard() {
        let mut clipboard = open_clipboard(&output)?;
        if !output.append() {
            clipboard.clear()?;
        }
        clipboard.accept(&latex)?;
    }

    Ok(())
}

/// Load the configuration file and apply command-line overrides on top.
fn resolve_config(args: &Args) -> Result<AppConfig, TapelineError> {
    let mut app_config = config::load_config(args.config.as_ref())?;

    if let Some(min_length) = args.min_length {
        app_config = app_config.with_min_length(ContractViolation::check_min_length(min_length)?);
    }

    let file_output = app_config.output();
    let output = OutputConfig::new(
        file_output.clipboard() && !args.no_clipboard,
        file_output.append() || args.append,
        file_output.wait() || args.wait,
    );

    Ok(app_config.with_output(output))
}
