//! Asset entities
//!
//! [`Asset`] is one input file loaded for embedding; [`AssetEntry`] is what
//! survives after its header has been written.

use std::path::{Path, PathBuf};

use super::hash::ContentHash;
use super::symbol::derive_symbol;

/// A matched input file, before its content is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path relative to the input root, `/`-separated
    pub relative_path: String,
    /// Absolute path on disk
    pub source_path: PathBuf,
}

impl DiscoveredFile {
    pub fn new(relative_path: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_path: source_path.into(),
        }
    }

    /// Symbol this file's declarations will use
    pub fn symbol(&self) -> String {
        derive_symbol(&self.relative_path)
    }
}

/// One input file with its content loaded.
///
/// `bytes` is never empty; the loader rejects zero-length files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    relative_path: String,
    symbol: String,
    bytes: Vec<u8>,
}

impl Asset {
    /// Build an asset, returning `None` for empty content.
    pub fn new(relative_path: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let relative_path = relative_path.into();
        Some(Self {
            symbol: derive_symbol(&relative_path),
            relative_path,
            bytes,
        })
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Record the written header and drop the content.
    pub fn into_entry(self, header_path: &Path) -> AssetEntry {
        AssetEntry {
            digest: ContentHash::from_bytes(&self.bytes),
            size: self.bytes.len(),
            relative_path: self.relative_path,
            symbol: self.symbol,
            header_path: header_path.to_path_buf(),
        }
    }
}

/// An asset whose header exists on disk; the manifest is built from these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub relative_path: String,
    pub symbol: String,
    pub size: usize,
    pub digest: ContentHash,
    pub header_path: PathBuf,
}

impl AssetEntry {
    /// Entry without a real header, for rendering manifests in tests and tools.
    pub fn new(relative_path: impl Into<String>, size: usize) -> Self {
        let relative_path = relative_path.into();
        let symbol = derive_symbol(&relative_path);
        Self {
            header_path: PathBuf::from(format!("{symbol}.h")),
            relative_path,
            symbol,
            size,
            digest: ContentHash::from_bytes(&[]),
        }
    }
}
