//! Index manifest generation
//!
//! `embedded_assets.h` includes every per-asset header and lists the assets
//! in a table. The count is derived from the table with `sizeof`, so it can
//! never drift from the records.

use std::path::{Path, PathBuf};

use super::escaping::c_string_literal;
use super::header::{header_file_name, PRELUDE};
use crate::domain::{AssetEntry, LEN_SUFFIX};
use crate::error::EmbedResult;
use crate::infrastructure::writer::OutputWriter;

/// Fixed file name of the manifest inside the output directory
pub const MANIFEST_FILE_NAME: &str = "embedded_assets.h";

const RECORD_TYPE: &str = "typedef struct {\n  const char *rel_path;\n  const uint8_t *data;\n  size_t size;\n} embedded_asset_t;\n\n";

/// Render the manifest for `entries`, in the given order.
pub fn render_manifest(entries: &[AssetEntry]) -> String {
    let mut out = String::with_capacity(512 + entries.len() * 128);
    out.push_str(PRELUDE);
    out.push_str(RECORD_TYPE);

    for entry in entries {
        out.push_str(&format!(
            "#include \"{}\"\n",
            header_file_name(&entry.symbol)
        ));
    }

    out.push_str("\nstatic const embedded_asset_t embedded_assets[] = {\n");
    for entry in entries {
        out.push_str(&format!(
            "  {{ {}, {sym}, {sym}{LEN_SUFFIX} }},\n",
            c_string_literal(&entry.relative_path),
            sym = entry.symbol
        ));
    }
    out.push_str("};\n");
    out.push_str(
        "static const size_t embedded_assets_count = sizeof(embedded_assets)/sizeof(embedded_assets[0]);\n",
    );
    out
}

/// Write the manifest into `out_dir`.
pub fn write_manifest(
    writer: &OutputWriter,
    out_dir: &Path,
    entries: &[AssetEntry],
) -> EmbedResult<PathBuf> {
    let path = out_dir.join(MANIFEST_FILE_NAME);
    writer.write(&path, render_manifest(entries).as_bytes())?;
    Ok(path)
}
