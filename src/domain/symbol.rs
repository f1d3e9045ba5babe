//! Symbol derivation
//!
//! Maps a relative asset path to a C identifier. The mapping is lossy: every
//! character outside `[A-Za-z0-9_]` becomes `_`, so distinct paths can share
//! a symbol. Callers that need uniqueness check with [`find_collision`].

use std::collections::HashMap;

/// Prefix shared by every generated symbol
pub const SYMBOL_PREFIX: &str = "asset_";

/// Derive the symbol for a relative path.
///
/// `a.cbor` becomes `asset_a_cbor`, `sub/b.cbor.gz` becomes
/// `asset_sub_b_cbor_gz`.
pub fn derive_symbol(relative_path: &str) -> String {
    let mut symbol = String::with_capacity(SYMBOL_PREFIX.len() + relative_path.len());
    symbol.push_str(SYMBOL_PREFIX);
    symbol.extend(relative_path.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    symbol
}

/// A pair of distinct paths that derive the same symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub symbol: String,
    pub first: String,
    pub second: String,
}

/// Suffix of the length constant declared next to every symbol
pub const LEN_SUFFIX: &str = "_len";

/// Return the first collision among `(relative_path, symbol)` pairs, in input order.
///
/// Two kinds of clash are reported: distinct paths sharing a symbol, and a
/// symbol that equals another asset's `<symbol>_len` constant. Identical
/// paths are not a collision.
pub fn find_collision<'a, I>(pairs: I) -> Option<Collision>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut unique: Vec<(&str, &str)> = Vec::new();
    for (path, symbol) in pairs {
        match seen.get(symbol) {
            Some(existing) if *existing != path => {
                return Some(Collision {
                    symbol: symbol.to_string(),
                    first: existing.to_string(),
                    second: path.to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(symbol, path);
                unique.push((path, symbol));
            }
        }
    }

    unique.into_iter().find_map(|(path, symbol)| {
        let base = symbol.strip_suffix(LEN_SUFFIX)?;
        let owner = seen.get(base)?;
        Some(Collision {
            symbol: symbol.to_string(),
            first: owner.to_string(),
            second: path.to_string(),
        })
    })
}
