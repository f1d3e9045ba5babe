//! Console Event Sink
//!
//! Plain text progress. The final summary line is the tool's success message;
//! per-asset lines only appear at verbose levels.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::{GenerateEvent, GenerateEventSink};

/// Tag prefixed to every status line
pub const STATUS_TAG: &str = "[ASSETS]";

/// Event sink that prints human-readable lines
pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match event {
            GenerateEvent::Started {
                input_dir,
                pattern,
                recursive,
                ..
            } if self.verbosity >= Verbosity::Verbose => {
                let mode = if recursive { "recursive" } else { "top-level" };
                self.line(&format!(
                    "{STATUS_TAG} Scanning {} for {} ({})",
                    input_dir.display(),
                    pattern,
                    mode
                ));
            }

            GenerateEvent::AssetWritten { entry, .. } if self.verbosity >= Verbosity::Verbose => {
                let mut text = format!(
                    "  + {} -> {}.h ({} bytes)",
                    entry.relative_path, entry.symbol, entry.size
                );
                if self.verbosity >= Verbosity::Debug {
                    text.push_str(&format!(" {}", entry.digest));
                }
                self.line(&text);
            }

            GenerateEvent::Completed {
                count,
                bytes,
                output_dir,
            } if self.verbosity > Verbosity::Quiet => {
                if self.verbosity >= Verbosity::Verbose {
                    self.line(&format!("{STATUS_TAG} Embedded {bytes} bytes"));
                }
                self.line(&format!(
                    "{STATUS_TAG} Generated {} file(s) into {}",
                    count,
                    output_dir.display()
                ));
            }

            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
