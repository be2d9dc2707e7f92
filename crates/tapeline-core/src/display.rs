//! The display sequence: a padded tape framed by ellipsis cells.
//!
//! Renderers never see the tape directly. They lay out one column per
//! display cell and one [`Marker`] per column underneath it.

use crate::tape::Tape;

/// Cell drawn at both ends of the tape to show that it continues.
pub const ELLIPSIS: &str = "...";

/// What to draw below a column in the pointer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Empty placeholder.
    Blank,
    /// The upward arrow under the current cell.
    Pointer,
}

/// A tape's cells wrapped in leading and trailing [`ELLIPSIS`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySequence<'a> {
    cells: Vec<&'a str>,
    head: usize,
}

impl<'a> DisplaySequence<'a> {
    /// Wrap `tape` in ellipsis cells and shift its head past the leading one.
    ///
    /// An empty tape produces two adjacent ellipsis columns with the head on
    /// the trailing one.
    pub fn wrap(tape: &'a Tape) -> Self {
        let cells = std::iter::once(ELLIPSIS)
            .chain(tape.cells().iter().map(String::as_str))
            .chain(std::iter::once(ELLIPSIS))
            .collect();
        Self {
            cells,
            head: tape.head() + 1,
        }
    }

    /// Display cells, including both ellipsis cells.
    pub fn cells(&self) -> &[&'a str] {
        &self.cells
    }

    /// Number of columns; always the tape length plus two.
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Column holding the current cell.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Whether `column` is the last one, which carries no trailing rule.
    pub fn is_last(&self, column: usize) -> bool {
        column + 1 == self.cells.len()
    }

    /// One marker per column: the pointer at the head, blanks elsewhere.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        (0..self.columns()).map(move |column| {
            if column == self.head {
                Marker::Pointer
            } else {
                Marker::Blank
            }
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn tape_strategy() -> impl Strategy<Value = Tape> {
        (0usize..30, 0usize..50).prop_flat_map(|(len, min_length)| {
            let cells = (0..len).map(|i| format!("s{i}")).collect::<Vec<_>>();
            let head = 0..len.max(1);
            (Just(cells), head, Just(min_length)).prop_map(|(cells, head, min_length)| {
                Tape::new(cells, head)
                    .expect("strategy only yields valid heads")
                    .pad(min_length)
            })
        })
    }

    /// Column count is the tape length plus the two ellipsis cells.
    fn check_column_count(tape: &Tape) -> Result<(), TestCaseError> {
        let display = DisplaySequence::wrap(tape);
        prop_assert_eq!(display.columns(), tape.len() + 2);
        Ok(())
    }

    /// Exactly one pointer, at the shifted head, one marker per column.
    fn check_marker_alignment(tape: &Tape) -> Result<(), TestCaseError> {
        let display = DisplaySequence::wrap(tape);
        let markers: Vec<_> = display.markers().collect();
        prop_assert_eq!(markers.len(), display.columns());

        let pointers: Vec<_> = markers
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Marker::Pointer)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(pointers, vec![tape.head() + 1]);
        Ok(())
    }

    proptest! {
        #[test]
        fn column_count(tape in tape_strategy()) {
            check_column_count(&tape)?;
        }

        #[test]
        fn marker_alignment(tape in tape_strategy()) {
            check_marker_alignment(&tape)?;
        }
    }
}
