//! Infrastructure Layer
//!
//! Everything that touches the filesystem or the terminal: directory
//! discovery, output writing and event sinks.

pub mod discovery;
pub mod events;
pub mod writer;

pub use discovery::{discover, AssetPattern, DEFAULT_PATTERN};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use writer::{atomic_write, OutputWriter, WriteMode};
