//! LaTeX `tabular` rendering of tape diagrams.
//!
//! The diagram is a boxed, centred table with three rows: the state name
//! spanning every column, the tape cells separated by vertical rules, and
//! the pointer row with `$\uparrow$` under the current cell. Labels and cell
//! contents are emitted verbatim; the document is expected to define the
//! `\statename` and `\symb` macros and load the `float` package for `[H]`.

use log::debug;

use tapeline_core::{
    ContractViolation, Tape,
    display::{DisplaySequence, Marker},
};

/// Glyph placed under the current cell.
pub const POINTER_GLYPH: &str = r"$\uparrow$";

const PREAMBLE: &str = concat!(
    r"\begin{center}",
    "\n",
    r"\fbox{\begin{minipage}{\textwidth}",
    "\n",
    r"\begin{table}[H]",
    "\n",
    r"\begin{center}",
    "\n",
);

const POSTAMBLE: &str = concat!(
    r"\end{tabular}",
    "\n",
    r"\end{center}",
    "\n",
    r"\end{table}",
    "\n",
    r"\end{minipage}}",
    "\n",
    r"\end{center}",
    "\n",
);

const ROW_RULE: &str = concat!(r"\\ \hline", "\n");

/// Render a padded tape under `state_label`.
///
/// The tape is wrapped in ellipsis cells first, so the table always has
/// `tape.len() + 2` columns. Output is deterministic for identical inputs.
pub fn render_tape(state_label: &str, tape: &Tape) -> String {
    let display = DisplaySequence::wrap(tape);
    let columns = display.columns();

    let mut out = String::from(PREAMBLE);
    out.push_str(&format!(r"\begin{{tabular}}{{{}}}", "c".repeat(columns)));
    out.push('\n');
    out.push_str(&format!(
        r"\multicolumn{{{columns}}}{{l}}{{\statename{{{state_label}}}}} \\"
    ));
    out.push('\n');
    out.push_str(ROW_RULE);
    out.push_str(&symbol_row(&display));
    out.push('\n');
    out.push_str(ROW_RULE);
    out.push_str(&marker_row(&display));
    out.push('\n');
    out.push_str(POSTAMBLE);

    debug!(columns, head = display.head(); "Rendered LaTeX diagram");
    out
}

/// Render already padded cells with the pointer at `pointer_index`.
///
/// # Errors
///
/// Returns [`ContractViolation::HeadOutOfRange`] if `pointer_index` does not
/// address one of `padded_cells`.
pub fn render(
    state_label: &str,
    padded_cells: &[String],
    pointer_index: usize,
) -> Result<String, ContractViolation> {
    let tape = Tape::new(padded_cells.iter().cloned(), pointer_index)?;
    Ok(render_tape(state_label, &tape))
}

fn symbol_row(display: &DisplaySequence<'_>) -> String {
    display
        .cells()
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            let align = if display.is_last(column) { "c" } else { "c|" };
            format!(r"\multicolumn{{1}}{{{align}}}{{\symb{{{cell}}}}}")
        })
        .collect::<Vec<_>>()
        .join(" & ")
}

// Separators left of the pointer open each placeholder ("& "), those right of
// it close one (" &"), so both rows share the same column structure.
fn marker_row(display: &DisplaySequence<'_>) -> String {
    let mut row = String::new();
    let mut seen_pointer = false;
    for marker in display.markers() {
        match marker {
            Marker::Pointer => {
                row.push_str(POINTER_GLYPH);
                seen_pointer = true;
            }
            Marker::Blank if seen_pointer => row.push_str(" &"),
            Marker::Blank => row.push_str("& "),
        }
    }
    row
}
