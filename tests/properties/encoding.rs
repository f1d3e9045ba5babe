//! Property tests for the byte array encoding.

use proptest::prelude::*;

use embedgen::codegen::{render_header, BYTES_PER_ROW};

/// Pull the array body out of a rendered header.
fn array_rows(header: &str) -> Vec<&str> {
    let start = header.find("[] = {\n").unwrap() + "[] = {\n".len();
    let end = header.find("};\n").unwrap();
    header[start..end].lines().collect()
}

fn decode(rows: &[&str]) -> Vec<u8> {
    rows.iter()
        .flat_map(|row| row.split(',').filter(|lit| !lit.is_empty()))
        .map(|lit| u8::from_str_radix(lit.trim_start_matches("0x"), 16).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding the literals reproduces the input bytes.
    #[test]
    fn property_literals_decode_to_input(bytes in proptest::collection::vec(any::<u8>(), 1..600)) {
        let header = render_header("asset_x", &bytes);
        prop_assert_eq!(decode(&array_rows(&header)), bytes);
    }

    /// PROPERTY: rows hold at most BYTES_PER_ROW literals, all full except the last.
    #[test]
    fn property_row_layout(bytes in proptest::collection::vec(any::<u8>(), 1..600)) {
        let header = render_header("asset_x", &bytes);
        let rows = array_rows(&header);
        prop_assert_eq!(rows.len(), bytes.len().div_ceil(BYTES_PER_ROW));
        for row in &rows[..rows.len() - 1] {
            prop_assert_eq!(row.matches(',').count(), BYTES_PER_ROW);
        }
        for row in &rows {
            prop_assert!(row.ends_with(','));
            prop_assert!(!row.contains(' '));
        }
    }

    /// PROPERTY: the length constant equals the byte count.
    #[test]
    fn property_len_constant(bytes in proptest::collection::vec(any::<u8>(), 1..300)) {
        let header = render_header("asset_x", &bytes);
        let expected = format!("static const size_t asset_x_len = (size_t){};\n", bytes.len());
        prop_assert!(header.ends_with(&expected));
    }
}
