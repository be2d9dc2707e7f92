//! Export of tape diagrams to text formats.

pub mod latex;
