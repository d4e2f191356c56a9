//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::GraftError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Load and parse YAML configuration from file
pub fn load_config(system: &dyn System, path: &Path) -> Result<Config> {
    if !system.exists(path)? {
        return Err(GraftError::configuration(format!(
            "Configuration file not found: {}\n\
            Create a uxgraft.yaml file in the project root or pass a different path with --config",
            path.display()
        ))
        .into());
    }

    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    let raw: serde_json::Value = serde_yaml::from_str(&content).map_err(|e| {
        GraftError::configuration(format!(
            "Failed to parse YAML configuration in file: {}\n{e}",
            path.display()
        ))
    })?;
    // An empty file parses as null
    let raw = if raw.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        raw
    };

    crate::config::schema::validate_against_schema(&raw)
        .map_err(|e| GraftError::configuration(e.to_string()))?;

    let config: Config = serde_json::from_value(raw)
        .map_err(|e| GraftError::configuration(format!("Invalid configuration: {e}")))?;

    config.validate()?;
    debug!("Loaded configuration from {}", path.display());

    Ok(config)
}
