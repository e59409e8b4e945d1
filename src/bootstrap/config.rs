//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto [`DialogConfig`]. Keys that are absent
//! keep their built-in defaults; nothing here validates values.

use anyhow::Context;
use std::path::PathBuf;

use pd_core::DialogConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// carries a value of the wrong type for a known key.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<DialogConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    DialogConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid dialog config in {}", config_path.display()))
}

/// Built-in defaults when no path is given, otherwise [`load_config`].
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<DialogConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(DialogConfig::default()),
    }
}
