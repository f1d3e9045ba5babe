//! Generate Options
//!
//! The fully-resolved parameters of one run.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{EmbedError, EmbedResult};
use crate::infrastructure::discovery::DEFAULT_PATTERN;
use crate::infrastructure::writer::WriteMode;

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory scanned for assets
    pub input_dir: PathBuf,
    /// Directory receiving `<symbol>.h` and the manifest
    pub output_dir: PathBuf,
    /// Filename glob
    pub pattern: String,
    /// Scan subdirectories
    pub recursive: bool,
    pub write_mode: WriteMode,
}

impl GenerateOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            recursive: false,
            write_mode: WriteMode::Atomic,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }
}

impl TryFrom<&Config> for GenerateOptions {
    type Error = EmbedError;

    fn try_from(config: &Config) -> EmbedResult<Self> {
        let input_dir = config.input.dir.clone().ok_or(EmbedError::MissingSetting {
            key: "input.dir",
            flag: "in-dir",
        })?;
        let output_dir = config.output.dir.clone().ok_or(EmbedError::MissingSetting {
            key: "output.dir",
            flag: "out-dir",
        })?;
        let write_mode = if config.output.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        };

        Ok(Self::new(input_dir, output_dir)
            .with_pattern(config.input.pattern.clone())
            .with_recursive(config.input.recursive)
            .with_write_mode(write_mode))
    }
}
