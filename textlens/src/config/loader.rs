// src/config/loader.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ConfigFile;

pub const CONFIG_FILE_NAME: &str = ".textlens.toml";

/// Looks for a `.textlens.toml` file in `dir`, then in each parent directory.
///
/// Returns the first file found, or `None` when the filesystem root is
/// reached without a match.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads the nearest `.textlens.toml` starting from `dir`.
///
/// # Returns
///
/// * `Ok(ConfigFile)` - The parsed file, or an empty config when none exists
///
/// # Errors
///
/// This function may return an error if:
/// * A config file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<ConfigFile> {
    match find_config_file(dir) {
        Some(path) => load_config_from(&path),
        None => {
            debug!(start = %dir.display(), "no {CONFIG_FILE_NAME} found");
            Ok(ConfigFile::default())
        }
    }
}

/// Loads a config file from an explicit path.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
