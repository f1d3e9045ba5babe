//! Event sink implementations

mod console;
mod json;

pub use console::{ConsoleEventSink, STATUS_TAG};
pub use json::{event_to_json, JsonEventSink};
