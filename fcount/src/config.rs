// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = ".fcount.toml";

/// Defaults read from `.fcount.toml`. Command-line flags take precedence.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub delimiter: Option<String>,
    pub csv: Option<bool>,
    pub quote: Option<String>,
    pub header: Option<bool>,
}

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or names an unknown key.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).context("Failed to parse configuration")
}

/// Reads configuration from an explicit path.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid configuration
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Loads `.fcount.toml` starting from the given directory and walking up
/// through parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for `.fcount.toml`
///
/// # Returns
///
/// * `Ok(Config)` - The first configuration found, or the empty default
///
/// # Errors
///
/// This function may return an error if:
/// * The `.fcount.toml` file exists but cannot be read
/// * The file contains invalid TOML or unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited: HashSet<PathBuf> = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            debug!(path = %config_file.display(), "loading configuration");
            return read_config(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}
