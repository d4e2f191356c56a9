//! Launcher activity lookup in `AndroidManifest.xml`

use anyhow::Result;
use regex::Regex;

const MAIN_ACTION: &str = "android.intent.action.MAIN";
const LAUNCHER_CATEGORY: &str = "android.intent.category.LAUNCHER";

// Self-closing <activity .../> elements are excluded so a body is never borrowed
// from the next element.
const ACTIVITY_ELEMENT: &str =
    r#"(?s)<activity\s[^>]*?\bandroid:name\s*=\s*"([^"]+)"(?:[^>]*[^/>])?>(.*?)</activity>"#;

/// Declared name of the first activity whose intent filters carry both the MAIN
/// action and the LAUNCHER category, with a leading `.` removed
///
/// # Errors
///
/// Returns an error if the element pattern fails to compile
pub fn launcher_activity_name(manifest: &str) -> Result<Option<String>> {
    let element = Regex::new(ACTIVITY_ELEMENT)?;
    Ok(element
        .captures_iter(manifest)
        .find(|caps| {
            let body = caps.get(2).map_or("", |m| m.as_str());
            body.contains(MAIN_ACTION) && body.contains(LAUNCHER_CATEGORY)
        })
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim_start_matches('.').to_owned()))
}

/// Last dotted segment of a component name
#[must_use]
pub fn simple_name(component: &str) -> &str {
    component.rsplit('.').next().unwrap_or(component)
}
