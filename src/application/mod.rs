//! Application Layer
//!
//! The generate use case and its options. Pure orchestration over the domain,
//! codegen and infrastructure modules.

pub mod generate;
pub mod options;

pub use generate::{generate, generate_with_events, GenerateReport};
pub use options::GenerateOptions;
