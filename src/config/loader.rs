//! Configuration file discovery and loading.
//!
//! Cairn reads a single `cairn.yml` per project. Resolution has two
//! modes: an explicit `--config <path>` loads exactly that file, while
//! the default mode walks upward from the tool's install directory until
//! a `cairn.yml` is found. Either way the file's contents are overlaid
//! on the built-in defaults before the typed config is parsed.

use crate::config::merger::deep_merge;
use crate::config::schema::Config;
use crate::error::{CairnError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "cairn.yml";

/// Find the nearest `cairn.yml` at or above `start`.
///
/// Walks up the directory tree one level at a time and returns the first
/// match, or None when the filesystem root is reached without one.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
///
/// An empty file parses to null, which is normalized to an empty mapping
/// so it overlays as "no changes" rather than wiping the defaults.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CairnError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CairnError::Io(e)
        }
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|e| CairnError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if value.is_null() {
        Ok(Value::Mapping(Default::default()))
    } else {
        Ok(value)
    }
}

/// Overlay a raw config value on the built-in defaults and parse the
/// result into a typed [`Config`] rooted at `root`.
pub fn parse_with_defaults(value: Value, root: PathBuf, source: &Path) -> Result<Config> {
    let defaults = serde_yaml::to_value(Config::default()).map_err(anyhow::Error::new)?;
    let merged = deep_merge(&defaults, &value);

    let mut config: Config =
        serde_yaml::from_value(merged).map_err(|e| CairnError::ConfigParseError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    config.root = root;
    Ok(config)
}

/// Resolve the configuration for one dispatch.
///
/// With an explicit path the file must exist and the root context is the
/// current working directory. Without one, discovery walks up from
/// `tool_dir`; a discovered config roots the project at `tool_dir`
/// itself, and no config at all yields pure defaults rooted at the
/// working directory.
pub fn resolve_from(tool_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let value = load_config_value(path)?;
        return parse_with_defaults(value, std::env::current_dir()?, path);
    }

    match find_config_file(tool_dir) {
        Some(found) => {
            tracing::debug!("Loading config from {}", found.display());
            let value = load_config_value(&found)?;
            parse_with_defaults(value, tool_dir.to_path_buf(), &found)
        }
        None => Ok(Config::defaults(std::env::current_dir()?)),
    }
}
