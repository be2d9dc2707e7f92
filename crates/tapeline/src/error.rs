//! Error types for Tapeline operations.
//!
//! This module provides the main error type [`TapelineError`] which wraps
//! the error conditions that can occur while producing and delivering a
//! diagram.

use std::io;

use thiserror::Error;

use tapeline_core::ContractViolation;

use crate::sink::SinkError;

/// The main error type for Tapeline operations.
///
/// `Contract` errors are raised before any rendering happens. `Sink` errors
/// come from output collaborators once the diagram text already exists.
#[derive(Debug, Error)]
pub enum TapelineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    Contract(#[from] ContractViolation),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Sink(#[from] SinkError),
}
