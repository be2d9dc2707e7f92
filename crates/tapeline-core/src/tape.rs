//! A tape: an ordered sequence of display cells with a validated head.

use crate::{error::ContractViolation, layout};

/// An ordered sequence of opaque display cells with a head position.
///
/// The head is validated on construction and kept in range by every
/// operation on the tape. An empty tape accepts only head `0`, which points
/// at the first blank cell padding will create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<String>,
    head: usize,
}

impl Tape {
    /// Create a tape after checking that `head` addresses one of `cells`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::HeadOutOfRange`] if `head` is not a valid
    /// index into a non-empty `cells`, or is non-zero for an empty `cells`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tapeline_core::Tape;
    ///
    /// let tape = Tape::new(vec!["a".to_string(), "b".to_string()], 1).unwrap();
    /// assert_eq!(tape.head(), 1);
    /// assert!(Tape::new(vec!["a".to_string()], 1).is_err());
    /// ```
    pub fn new<I, S>(cells: I, head: usize) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let in_range = if cells.is_empty() {
            head == 0
        } else {
            head < cells.len()
        };
        if !in_range {
            return Err(ContractViolation::HeadOutOfRange {
                head,
                len: cells.len(),
            });
        }
        Ok(Self { cells, head })
    }

    /// Widen the tape with blank cells until it holds at least `minimum_length` cells.
    ///
    /// See [`layout::pad_sequence`] for how blanks are distributed.
    #[must_use]
    pub fn pad(self, minimum_length: usize) -> Self {
        let (cells, head) = layout::pad_sequence(self.cells, self.head, minimum_length);
        Self { cells, head }
    }

    /// The cells of the tape, left to right.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Index of the current cell.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Number of cells on the tape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the tape holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Content of the current cell, if the tape is not empty.
    pub fn current(&self) -> Option<&str> {
        self.cells.get(self.head).map(String::as_str)
    }
}
