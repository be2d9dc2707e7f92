//! Tapeline - LaTeX diagrams of automaton tape snapshots.
//!
//! A tape snapshot is a state label, a row of symbol cells and the index of
//! the current cell. Tapeline pads the row to a minimum width, frames it with
//! ellipsis cells and renders a `tabular` with an arrow under the current
//! cell.

pub mod config;
pub mod export;
pub mod sink;

mod error;

pub use tapeline_core::{ContractViolation, Tape, display, layout};

pub use config::DEFAULT_MIN_LENGTH;
pub use error::TapelineError;

use log::{debug, info, trace};

use config::AppConfig;

/// A validated, padded tape snapshot ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    state_label: String,
    tape: Tape,
}

impl Diagram {
    /// Name of the machine state shown above the tape.
    pub fn state_label(&self) -> &str {
        &self.state_label
    }

    /// The padded tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}

/// Builder for validating and rendering tape diagrams.
///
/// # Examples
///
/// ```rust
/// use tapeline::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default().with_min_length(5));
///
/// let diagram = builder
///     .build("q1", ["1", "0", "1"], 2)
///     .expect("head is in range");
/// assert_eq!(diagram.tape().len(), 5);
///
/// let latex = builder.render_latex(&diagram);
/// assert!(latex.contains(r"\statename{q1}"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate the inputs and pad the tape to the configured minimum length.
    ///
    /// # Errors
    ///
    /// Returns [`TapelineError::Contract`] if `head` does not address one of
    /// `cells`. Nothing is padded in that case.
    pub fn build<I, S>(
        &self,
        state_label: impl Into<String>,
        cells: I,
        head: usize,
    ) -> Result<Diagram, TapelineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state_label = state_label.into();
        let tape = Tape::new(cells, head)?;
        debug!(state_label, cells = tape.len(), head; "Tape validated");

        let min_length = self.config.layout().min_length();
        let tape = tape.pad(min_length);
        info!(min_length, padded_len = tape.len(), head = tape.head(); "Tape padded");

        Ok(Diagram { state_label, tape })
    }

    /// Render a diagram as a LaTeX `tabular`.
    pub fn render_latex(&self, diagram: &Diagram) -> String {
        let latex = export::latex::render_tape(&diagram.state_label, &diagram.tape);
        trace!(latex; "Rendered diagram");
        latex
    }
}

/// Validate, pad and render a tape snapshot in one call.
///
/// `min_length` is usually [`DEFAULT_MIN_LENGTH`].
///
/// # Errors
///
/// Returns [`TapelineError::Contract`] if `head` does not address one of `cells`.
///
/// # Examples
///
/// ```rust
/// use tapeline::{DEFAULT_MIN_LENGTH, generate_diagram};
///
/// let latex = generate_diagram("X", ["*", "-", "4"], 2, DEFAULT_MIN_LENGTH).unwrap();
/// assert!(latex.starts_with(r"\begin{center}"));
/// ```
pub fn generate_diagram<I, S>(
    state_label: &str,
    cells: I,
    head: usize,
    min_length: usize,
) -> Result<String, TapelineError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let builder = DiagramBuilder::new(AppConfig::default().with_min_length(min_length));
    let diagram = builder.build(state_label, cells, head)?;
    Ok(builder.render_latex(&diagram))
}
