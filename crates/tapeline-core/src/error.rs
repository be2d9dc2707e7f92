//! Contract violations raised at the input boundary.
//!
//! Every check happens before padding starts. Nothing is clamped: an
//! out-of-range head would otherwise point at the wrong cell in the
//! rendered diagram.

use thiserror::Error;

/// A caller supplied inputs outside the accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("head index {head} is out of range for a tape of {len} cell(s)")]
    HeadOutOfRange { head: usize, len: usize },

    #[error("head index must not be negative (got {0})")]
    NegativeHead(i64),

    #[error("minimum length must not be negative (got {0})")]
    NegativeMinimumLength(i64),
}

impl ContractViolation {
    /// Convert a signed head index into a `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NegativeHead`] if `head` is negative.
    pub fn check_head(head: i64) -> Result<usize, Self> {
        usize::try_from(head).map_err(|_| Self::NegativeHead(head))
    }

    /// Convert a signed minimum length into a `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NegativeMinimumLength`] if `min_length` is negative.
    pub fn check_min_length(min_length: i64) -> Result<usize, Self> {
        usize::try_from(min_length).map_err(|_| Self::NegativeMinimumLength(min_length))
    }
}
