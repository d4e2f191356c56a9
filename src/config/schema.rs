//! JSON Schema validation for uxgraft configuration

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

/// Compile the embedded JSON schema for uxgraft configuration
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/config.schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::draft7::new(&schema).map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))
}

/// Validate a configuration value against the schema
pub fn validate_against_schema(config: &Value) -> Result<()> {
    let schema = get_schema()?;
    collect_errors(&schema, config)
        .map_err(|messages| anyhow!("Configuration validation failed:\n{messages}"))
}

/// Run `validator` over `instance`, joining every violation into one message
pub(crate) fn collect_errors(validator: &Validator, instance: &Value) -> Result<(), String> {
    let messages: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("  - {e}"))
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(messages.join("\n"))
    }
}
