//! embedgen - embed binary assets into C headers
//!
//! Scans a directory for files matching a glob, writes one `<symbol>.h` per
//! file holding its bytes as a `uint8_t` array, and writes an
//! `embedded_assets.h` manifest that includes every header and indexes the
//! assets by relative path.

pub mod application;
pub mod codegen;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{generate, generate_with_events, GenerateOptions, GenerateReport};
pub use config::{Config, Verbosity};
pub use domain::{derive_symbol, Asset, AssetEntry, GenerateEvent, GenerateEventSink};
pub use error::{EmbedError, EmbedResult};
