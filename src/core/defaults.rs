use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::render::ColorChoice;

/// Root configuration structure for ruplace.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuplaceConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via ruplace.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub color: ColorChoice,

    /// Directory names never descended into when the target is a directory.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            color: ColorChoice::default(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_skip_dirs() -> Vec<String> {
    [".git", ".hg", ".svn", "node_modules", "target"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the global ruplace.json, falling back to built-in defaults when the
/// file is missing or invalid.
pub fn load_config() -> RuplaceConfig {
    load_global_config().unwrap_or_default()
}

fn load_global_config() -> Result<RuplaceConfig> {
    let path = paths::ruplace_json()?;

    if !path.exists() {
        return Err(Error::internal_unexpected("ruplace.json not found"));
    }

    load_config_from(&path)
}

/// Load config from an explicit file. Unlike [`load_config`], any problem is
/// reported to the caller.
pub fn load_config_from(path: &Path) -> Result<RuplaceConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config: RuplaceConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &RuplaceConfig) -> Result<()> {
    for dir in &config.defaults.skip_dirs {
        if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
            return Err(Error::config_invalid_value(
                "defaults.skip_dirs",
                Some(dir.clone()),
                "Entries must be bare directory names",
            ));
        }
    }
    Ok(())
}
