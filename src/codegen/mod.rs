//! C code generation
//!
//! Rendering is pure (`render_*` return strings); the `write_*` helpers hand
//! the text to an [`OutputWriter`](crate::infrastructure::writer::OutputWriter).

pub mod escaping;
pub mod header;
pub mod manifest;

pub use escaping::{c_string_literal, escape_c_string};
pub use header::{header_file_name, render_header, write_header, BYTES_PER_ROW};
pub use manifest::{render_manifest, write_manifest, MANIFEST_FILE_NAME};
