//! Property tests for symbol derivation.

use proptest::prelude::*;

use embedgen::codegen::escape_c_string;
use embedgen::domain::{derive_symbol, SYMBOL_PREFIX};

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._ -]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every symbol is a C identifier made of [A-Za-z0-9_].
    #[test]
    fn property_symbol_is_identifier(s in "(?s).{0,64}") {
        let symbol = derive_symbol(&s);
        prop_assert!(symbol.starts_with(SYMBOL_PREFIX));
        prop_assert!(symbol.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));
    }

    /// PROPERTY: one character in, one character out.
    #[test]
    fn property_symbol_preserves_char_count(s in "(?s).{0,64}") {
        let symbol = derive_symbol(&s);
        prop_assert_eq!(symbol.len(), SYMBOL_PREFIX.len() + s.chars().count());
    }

    /// PROPERTY: derivation is a pure function of the path.
    #[test]
    fn property_symbol_is_deterministic(path in relative_path()) {
        prop_assert_eq!(derive_symbol(&path), derive_symbol(&path));
    }

    /// PROPERTY: identifier characters survive untouched.
    #[test]
    fn property_identifier_chars_kept(s in "[A-Za-z0-9_]{0,32}") {
        prop_assert_eq!(derive_symbol(&s), format!("{SYMBOL_PREFIX}{s}"));
    }

    /// PROPERTY: escaped paths never contain a raw quote, newline or lone backslash.
    #[test]
    fn property_escaped_path_is_single_literal(s in "(?s).{0,64}") {
        let escaped = escape_c_string(&s);
        prop_assert!(!escaped.contains('\n'));
        let mut chars = escaped.chars();
        while let Some(c) = chars.next() {
            prop_assert_ne!(c, '"');
            if c == '\\' {
                prop_assert!(chars.next().is_some());
            }
        }
    }
}
