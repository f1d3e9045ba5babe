//! Generate Event Port
//!
//! Observable interface for a generation run. The driver reports progress
//! here; the binary decides whether that becomes text, NDJSON or nothing.

use std::path::PathBuf;

use super::asset::AssetEntry;

/// Event emitted during a generation run
#[derive(Debug, Clone)]
pub enum GenerateEvent {
    /// Run started with resolved directories
    Started {
        input_dir: PathBuf,
        output_dir: PathBuf,
        pattern: String,
        recursive: bool,
    },

    /// Discovery finished
    Discovered { count: usize },

    /// One header was written
    AssetWritten { index: usize, entry: AssetEntry },

    /// The manifest was written
    ManifestWritten { path: PathBuf, count: usize },

    /// Run completed; `bytes` is the total embedded size
    Completed {
        count: usize,
        bytes: usize,
        output_dir: PathBuf,
    },
}

/// Trait for receiving generate events
pub trait GenerateEventSink {
    fn on_event(&self, event: GenerateEvent);

    /// Whether this sink wants one event per asset
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
