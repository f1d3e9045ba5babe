//! Asset discovery
//!
//! Walks the input directory with the `ignore` crate and keeps regular files
//! whose path matches the configured glob. Gitignore semantics apply to the
//! pattern itself (a pattern without `/` matches the file name at any depth),
//! but no ignore files or hidden-file rules are honored: every file counts.

use std::path::{Component, Path};

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;

use crate::domain::DiscoveredFile;
use crate::error::{EmbedError, EmbedResult};

/// Default pattern: CBOR files, compressed or not
pub const DEFAULT_PATTERN: &str = "*.cbor*";

/// Compiled filename pattern rooted at an input directory
#[derive(Debug)]
pub struct AssetPattern {
    source: String,
    matcher: Override,
    max_depth: Option<usize>,
}

impl AssetPattern {
    /// Compile `pattern` relative to `root`.
    ///
    /// Top-level runs match the pattern as written: `*.cbor` looks at the
    /// root's children only, `sub/*.cbor` at the children of `root/sub`.
    /// Recursive runs match it below any directory, so `sub/*.cbor` also
    /// finds `a/sub/x.cbor`.
    pub fn new(root: &Path, pattern: &str, recursive: bool) -> EmbedResult<Self> {
        let invalid = |message: String| EmbedError::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        };

        if pattern.trim().is_empty() {
            return Err(invalid("pattern is empty".to_string()));
        }
        // A leading '!' would turn the whitelist into an exclusion.
        if pattern.starts_with('!') {
            return Err(invalid("negated patterns are not supported".to_string()));
        }
        if pattern.starts_with('/') {
            return Err(invalid("pattern must be relative to the input dir".to_string()));
        }

        let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let nested = segments.len() > 1;

        // A gitignore glob containing '/' is anchored at the root.
        let glob = if recursive && nested && !pattern.starts_with("**/") {
            format!("**/{pattern}")
        } else {
            pattern.to_string()
        };

        let mut builder = OverrideBuilder::new(root);
        builder.add(&glob).map_err(|e| invalid(e.to_string()))?;
        let matcher = builder.build().map_err(|e| invalid(e.to_string()))?;

        let max_depth = if recursive || segments.contains(&"**") {
            None
        } else {
            Some(segments.len())
        };

        Ok(Self {
            source: pattern.to_string(),
            matcher,
            max_depth,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Deepest directory level the walk needs to visit, `None` for unlimited.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Check a file path relative to the root.
    pub fn matches(&self, relative_path: &Path) -> bool {
        self.matcher.matched(relative_path, false).is_whitelist()
    }
}

/// Find all files under `root` matching `pattern`, sorted by relative path.
///
/// `root` must be an existing directory. The walk goes no deeper than the
/// pattern allows. Symlinks are not followed into directories; a symlink to
/// a regular file counts as a file.
pub fn discover(root: &Path, pattern: &AssetPattern) -> EmbedResult<Vec<DiscoveredFile>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(pattern.max_depth())
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 || !entry.path().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if !pattern.matches(relative) {
            continue;
        }

        let relative_path = to_slash_path(relative).ok_or_else(|| EmbedError::NonUtf8Path {
            path: entry.path().to_path_buf(),
        })?;
        files.push(DiscoveredFile::new(relative_path, entry.path()));
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

/// Join the normal components of `path` with `/`.
///
/// Returns `None` if any component is not valid UTF-8.
pub fn to_slash_path(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}
