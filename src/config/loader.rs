//! YAML loader for pagination configs
//!
//! JSON documents are valid YAML, so both formats go through `serde_yaml`.

use super::types::{ConfigPatch, PaginationConfig};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginationConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load and validate a config from a YAML (or JSON) string
pub fn load_config_from_str(yaml: &str) -> Result<PaginationConfig> {
    let config: PaginationConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    config.validate()?;
    Ok(config)
}

/// Parse a partial config update; validation happens when it is merged
pub fn load_patch_from_str(yaml: &str) -> Result<ConfigPatch> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config patch: {e}")))
}
