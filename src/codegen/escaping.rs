//! C string literal escaping
//!
//! Relative paths end up inside `"..."` in the manifest. Anything that would
//! terminate or corrupt the literal is escaped; printable text, including
//! non-ASCII UTF-8, passes through unchanged.

/// Escape a string for use between double quotes in C source.
///
/// Escapes: backslash, double quote, `\n`, `\r`, `\t`, other control
/// characters as three-digit octal, and `?` after `?` (trigraphs).
pub fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_question = false;

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '?' if prev_question => out.push_str("\\?"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
        prev_question = c == '?';
    }

    out
}

/// Quote and escape a string as a complete C string literal.
pub fn c_string_literal(s: &str) -> String {
    format!("\"{}\"", escape_c_string(s))
}
