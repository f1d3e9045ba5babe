//! Per-asset header generation
//!
//! One header per asset, named `<symbol>.h`, holding the bytes as a
//! `uint8_t` array and its length as a `size_t`.

use std::path::{Path, PathBuf};

use crate::domain::{Asset, LEN_SUFFIX};
use crate::error::EmbedResult;
use crate::infrastructure::writer::OutputWriter;

/// Literals per output row. Purely cosmetic.
pub const BYTES_PER_ROW: usize = 16;

/// Guard and includes shared by every generated header
pub(crate) const PRELUDE: &str = "#pragma once\n#include <stdint.h>\n#include <stddef.h>\n\n";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// File name of the header for `symbol`
pub fn header_file_name(symbol: &str) -> String {
    format!("{symbol}.h")
}

/// Render the header text for `symbol` holding `bytes`.
pub fn render_header(symbol: &str, bytes: &[u8]) -> String {
    let rows = bytes.len().div_ceil(BYTES_PER_ROW);
    let mut out =
        String::with_capacity(PRELUDE.len() + 2 * symbol.len() + 96 + bytes.len() * 5 + rows);

    out.push_str(PRELUDE);
    out.push_str(&format!("static const uint8_t {symbol}[] = {{\n"));
    for row in bytes.chunks(BYTES_PER_ROW) {
        for &b in row {
            out.push_str("0x");
            out.push(HEX_DIGITS[usize::from(b >> 4)] as char);
            out.push(HEX_DIGITS[usize::from(b & 0x0f)] as char);
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out.push_str(&format!(
        "static const size_t {symbol}{LEN_SUFFIX} = (size_t){};\n",
        bytes.len()
    ));
    out
}

/// Write `asset`'s header into `out_dir`, replacing any previous one.
pub fn write_header(writer: &OutputWriter, out_dir: &Path, asset: &Asset) -> EmbedResult<PathBuf> {
    let path = out_dir.join(header_file_name(asset.symbol()));
    let content = render_header(asset.symbol(), asset.bytes());
    writer.write(&path, content.as_bytes())?;
    Ok(path)
}
