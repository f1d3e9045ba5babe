//! Common test utilities for embedgen CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp directory
//! - Assertion macros: `assert_output_contains!`, `assert_generated!`

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
