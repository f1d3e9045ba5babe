//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EmbedError, EmbedResult};

use super::types::{Config, Verbosity};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "embedgen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A config file that was found and parsed
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when no file was found and defaults are used
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative directories in the file are resolved against the file's own
/// directory.
pub fn load_with_warnings(path: &Path) -> EmbedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)
        .map_err(|e| EmbedError::path_io("failed to read config", path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok((config.resolve_relative_to(base), warnings))
}

/// Load the explicit config file, or `embedgen.toml` from `cwd` if present.
///
/// An explicit path that does not exist is an error; a missing default file
/// just yields the built-in defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> EmbedResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => cwd.join(path),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(LoadedConfig {
                    config: Config::default(),
                    warnings: Vec::new(),
                    source: None,
                });
            }
            candidate
        }
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config,
        warnings,
        source: Some(path),
    })
}

/// Apply environment variable overrides (EMBEDGEN_* prefix)
///
/// Values that do not parse are ignored.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(dir) = non_empty(get_env("EMBEDGEN_IN_DIR")) {
        config.input.dir = Some(PathBuf::from(dir));
    }

    if let Some(dir) = non_empty(get_env("EMBEDGEN_OUT_DIR")) {
        config.output.dir = Some(PathBuf::from(dir));
    }

    if let Some(pattern) = non_empty(get_env("EMBEDGEN_PATTERN")) {
        config.input.pattern = pattern;
    }

    if let Some(recursive) = get_env("EMBEDGEN_RECURSIVE").as_deref().and_then(parse_bool) {
        config.input.recursive = recursive;
    }

    if let Some(atomic) = get_env("EMBEDGEN_ATOMIC_WRITES")
        .as_deref()
        .and_then(parse_bool)
    {
        config.output.atomic_writes = atomic;
    }

    if let Some(verbosity) = get_env("EMBEDGEN_VERBOSITY")
        .as_deref()
        .and_then(Verbosity::parse)
    {
        config.output.verbosity = verbosity;
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "input",
        "output",
        "dir",
        "pattern",
        "recursive",
        "atomic_writes",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
