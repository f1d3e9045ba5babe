//! Error types for embedgen
//!
//! Library code returns [`EmbedResult`]; the binary wraps it in `anyhow` only
//! at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for embedgen operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for embedgen operations
#[derive(Error, Debug)]
pub enum EmbedError {
    /// A required setting was not supplied by any configuration layer
    #[error("missing required setting '{key}' (pass --{flag} or set it in embedgen.toml)")]
    MissingSetting { key: &'static str, flag: &'static str },

    /// Input directory is absent or not a directory
    #[error("input dir not found: {}", path.display())]
    InputDirNotFound { path: PathBuf },

    /// The filename pattern is not a valid glob
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Discovery found nothing to embed
    #[error("no files matching {pattern} in {}", dir.display())]
    NoMatches { pattern: String, dir: PathBuf },

    /// A matched file's relative path cannot be represented as text
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    /// Two distinct relative paths sanitize to the same symbol
    #[error("symbol collision: '{first}' and '{second}' both map to '{symbol}'")]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },

    /// A matched file has no content
    #[error("empty file: {}", path.display())]
    EmptyAsset { path: PathBuf },

    /// IO error tied to a specific path
    #[error("{action} {}: {source}", path.display())]
    PathIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error
    #[error("failed to scan input directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Malformed configuration file
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },
}

impl EmbedError {
    /// Wrap an IO error with the path it concerns.
    pub fn path_io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PathIo {
            action,
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code, used by JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSetting { .. } | Self::InvalidConfig { .. } => "config",
            Self::InputDirNotFound { .. } => "input_dir_not_found",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::NoMatches { .. } => "no_matches",
            Self::NonUtf8Path { .. } => "non_utf8_path",
            Self::SymbolCollision { .. } => "symbol_collision",
            Self::EmptyAsset { .. } => "empty_asset",
            Self::PathIo { .. } | Self::Io(_) | Self::Walk(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_matches() {
        let err = EmbedError::NoMatches {
            pattern: "*.cbor*".to_string(),
            dir: PathBuf::from("/work/models"),
        };
        assert_eq!(err.to_string(), "no files matching *.cbor* in /work/models");
    }

    #[test]
    fn test_error_display_collision() {
        let err = EmbedError::SymbolCollision {
            symbol: "asset_a_b_cbor".to_string(),
            first: "a-b.cbor".to_string(),
            second: "a/b.cbor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "symbol collision: 'a-b.cbor' and 'a/b.cbor' both map to 'asset_a_b_cbor'"
        );
    }

    #[test]
    fn test_error_display_path_io() {
        let err = EmbedError::path_io(
            "failed to write",
            "/out/asset_a.h",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write /out/asset_a.h: denied");
    }

    #[test]
    fn test_error_codes() {
        let err = EmbedError::EmptyAsset {
            path: PathBuf::from("x.cbor"),
        };
        assert_eq!(err.code(), "empty_asset");
        let err = EmbedError::MissingSetting {
            key: "input.dir",
            flag: "in-dir",
        };
        assert_eq!(err.code(), "config");
    }
}
