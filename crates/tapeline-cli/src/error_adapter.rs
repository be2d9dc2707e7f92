//! Error adapter for converting TapelineError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tapeline::{ContractViolation, TapelineError, sink::SinkError};

/// Adapter rendering a [`TapelineError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a TapelineError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TapelineError::Io(_) => "tapeline::io",
            TapelineError::Contract(_) => "tapeline::contract",
            TapelineError::Config(_) => "tapeline::config",
            TapelineError::Sink(SinkError::Unavailable { .. }) => "tapeline::clipboard",
            TapelineError::Sink(SinkError::Io(_)) => "tapeline::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TapelineError::Contract(ContractViolation::HeadOutOfRange { len: 0, .. }) => {
                "an empty tape only accepts --head 0".to_string()
            }
            TapelineError::Contract(ContractViolation::HeadOutOfRange { len, .. }) => {
                format!("--head must be between 0 and {}", len - 1)
            }
            TapelineError::Contract(ContractViolation::NegativeHead(_)) => {
                "--head counts cells from the left, starting at 0".to_string()
            }
            TapelineError::Contract(ContractViolation::NegativeMinimumLength(_)) => {
                "--min-length must be 0 or greater".to_string()
            }
            TapelineError::Sink(SinkError::Unavailable { .. }) => {
                "the diagram was still printed; pass --no-clipboard to skip the clipboard"
                    .to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render `err` as a miette graphical report.
///
/// Falls back to the plain error message if the report cannot be rendered.
pub fn render_report(err: &TapelineError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    match reporter.render_report(&mut writer, &ErrorAdapter(err)) {
        Ok(()) => writer,
        Err(_) => err.to_string(),
    }
}
