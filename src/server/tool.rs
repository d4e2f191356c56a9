//! The `add_uxcam_android` tool definition and invocation

use crate::config::schema::collect_errors;
use crate::operations::IntegrateOperation;
use rmcp::model::{CallToolResult, Content, ErrorData, JsonObject, Tool};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info};

pub const TOOL_NAME: &str = "add_uxcam_android";
pub const TOOL_DESCRIPTION: &str = "Add UXCam SDK (v3.+) & init call to an Android project";

/// JSON schema of the tool arguments
#[must_use]
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "appKeyRef": {
                "type": "string",
                "description": "Reference used in code, e.g. BuildConfig.UXCAM_KEY, a local.properties name, or the app key itself"
            }
        },
        "required": ["appKeyRef"]
    })
}

/// JSON schema of the tool result
#[must_use]
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "summary": { "type": "string" } },
        "required": ["summary"]
    })
}

fn schema_object(schema: &Value) -> Arc<JsonObject> {
    Arc::new(schema.as_object().cloned().unwrap_or_default())
}

/// Entry for `tools/list`
#[must_use]
pub fn descriptor() -> Tool {
    Tool {
        name: TOOL_NAME.into(),
        title: Some("Add UXCam to an Android project".into()),
        description: Some(TOOL_DESCRIPTION.into()),
        input_schema: schema_object(&input_schema()),
        output_schema: Some(schema_object(&output_schema())),
        annotations: None,
        execution: None,
        icons: None,
        meta: None,
    }
}

/// Validate `arguments` against the input schema and extract the key reference
///
/// # Errors
///
/// Returns an invalid-params error describing every schema violation
pub fn parse_arguments(arguments: Option<&JsonObject>) -> Result<String, ErrorData> {
    let instance = Value::Object(arguments.cloned().unwrap_or_default());
    let validator = jsonschema::draft7::new(&input_schema())
        .map_err(|e| ErrorData::internal_error(format!("Invalid tool schema: {e}"), None))?;
    collect_errors(&validator, &instance).map_err(|messages| {
        ErrorData::invalid_params(format!("Invalid arguments for {TOOL_NAME}:\n{messages}"), None)
    })?;

    Ok(instance
        .get("appKeyRef")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned())
}

/// Run the tool and wrap the summary as a tool result
///
/// # Errors
///
/// Returns invalid params for bad arguments and an internal error when the
/// integration fails on I/O
pub fn call(
    operation: &IntegrateOperation<'_>,
    arguments: Option<&JsonObject>,
) -> Result<CallToolResult, ErrorData> {
    let key_ref = parse_arguments(arguments)?;
    let report = operation.execute(&key_ref).map_err(|err| {
        error!("{TOOL_NAME} failed: {err:#}");
        ErrorData::internal_error(format!("{err:#}"), None)
    })?;
    let summary = report.summary();
    info!("{TOOL_NAME}: {summary}");

    let mut result = CallToolResult::success(vec![Content::text(summary.clone())]);
    result.structured_content = Some(json!({ "summary": summary }));
    Ok(result)
}
