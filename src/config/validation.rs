//! Configuration validation logic

use crate::config::Config;
use crate::error::GraftError;
use crate::utils::path::validate_relative_path;
use anyhow::Result;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if any layout override is empty, absolute, or escapes the
/// project root
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    for (key, value) in config.layout.entries() {
        validate_relative_path(value)
            .map_err(|e| GraftError::configuration(format!("layout.{key}: {e}")))?;
    }
    Ok(())
}
