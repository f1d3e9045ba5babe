//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::{GenerateEvent, GenerateEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event to its NDJSON object.
pub fn event_to_json(event: &GenerateEvent) -> serde_json::Value {
    match event {
        GenerateEvent::Started {
            input_dir,
            output_dir,
            pattern,
            recursive,
        } => serde_json::json!({
            "event": "start",
            "command": "generate",
            "version": env!("CARGO_PKG_VERSION"),
            "input_dir": input_dir.display().to_string(),
            "output_dir": output_dir.display().to_string(),
            "pattern": pattern,
            "recursive": recursive,
        }),

        GenerateEvent::Discovered { count } => serde_json::json!({
            "event": "discovered",
            "command": "generate",
            "count": count,
        }),

        GenerateEvent::AssetWritten { index, entry } => serde_json::json!({
            "event": "asset",
            "command": "generate",
            "index": index,
            "rel_path": entry.relative_path,
            "symbol": entry.symbol,
            "size": entry.size,
            "digest": entry.digest.as_str(),
            "header": entry.header_path.display().to_string(),
        }),

        GenerateEvent::ManifestWritten { path, count } => serde_json::json!({
            "event": "manifest",
            "command": "generate",
            "path": path.display().to_string(),
            "count": count,
        }),

        GenerateEvent::Completed {
            count,
            bytes,
            output_dir,
        } => serde_json::json!({
            "event": "complete",
            "command": "generate",
            "success": true,
            "count": count,
            "bytes": bytes,
            "output_dir": output_dir.display().to_string(),
        }),
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        self.write_event(event_to_json(&event));
    }
}
