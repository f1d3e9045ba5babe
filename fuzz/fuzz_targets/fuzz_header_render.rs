#![no_main]

use embedgen::codegen::render_header;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let header = render_header("asset_fuzz", data);
    assert_eq!(header.matches("0x").count(), data.len());
    assert!(header.ends_with(&format!("(size_t){};\n", data.len())));
});
