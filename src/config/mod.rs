//! Configuration module for embedgen
//!
//! Settings resolve in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EMBEDGEN_*)
//! 3. Config file (`--config <file>` or `./embedgen.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_config, load_with_warnings, with_env_overrides, ConfigWarning, LoadedConfig,
    DEFAULT_CONFIG_FILE,
};
pub use types::{Config, InputConfig, OutputConfig, Verbosity};
