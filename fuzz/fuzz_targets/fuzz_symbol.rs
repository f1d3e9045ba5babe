#![no_main]

use embedgen::codegen::c_string_literal;
use embedgen::derive_symbol;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        let symbol = derive_symbol(path);
        assert!(symbol.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));

        let literal = c_string_literal(path);
        assert!(!literal.contains('\n'));
    }
});
