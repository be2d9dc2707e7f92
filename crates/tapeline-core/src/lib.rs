//! Tapeline Core Types and Layout
//!
//! This crate provides the foundational types for Tapeline tape diagrams.
//! It includes:
//!
//! - **Errors**: Caller contract violations ([`error::ContractViolation`])
//! - **Tape**: A validated cell sequence with a head position ([`tape::Tape`])
//! - **Layout**: The padding algorithm that widens a tape to a minimum length ([`layout`] module)
//! - **Display**: The ellipsis-wrapped column sequence consumed by renderers ([`display`] module)

pub mod display;
pub mod error;
pub mod layout;
pub mod tape;

pub use error::ContractViolation;
pub use tape::Tape;
