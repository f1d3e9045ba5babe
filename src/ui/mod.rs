//! Terminal-facing helpers for the binary

pub mod ci;
pub mod error;
pub mod terminal;
