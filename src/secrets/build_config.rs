//! Detection and insertion of `buildConfigField` string constants

use crate::patch::engine::matching_brace;
use crate::patch::{AnchorKind, Dialect, anchor_regex};
use anyhow::Result;
use regex::Regex;

/// Indentation of one block level in generated Gradle code
const INDENT: &str = "    ";

/// Patterns that count as `name` already exposed as a `String` build-config field:
/// a literal value, a property lookup, or an environment lookup
fn exposure_patterns(dialect: Dialect, name: &str) -> Result<Vec<Regex>> {
    let name = regex::escape(name);
    let head = match dialect {
        Dialect::Java => format!(r#"buildConfigField\s*\(?\s*["']String["']\s*,\s*["']{name}["']\s*,\s*"#),
        Dialect::Kotlin => format!(r#"buildConfigField\s*\(\s*"String"\s*,\s*"{name}"\s*,\s*"#),
    };
    let values = [
        // "\"abc\"" or '"abc"'
        r#"(?:"\\".*\\""|'".*"')"#,
        r#"[^\n]*(?:findProperty|getProperty|properties\s*\[|localProperties|project\.property)"#,
        r#"[^\n]*(?:System\.getenv|providers\.environmentVariable)"#,
    ];
    values
        .iter()
        .map(|value| Ok(Regex::new(&format!("{head}{value}"))?))
        .collect()
}

/// Whether `content` already declares `name` as a string build-config field
///
/// # Errors
///
/// Returns an error if a detection pattern fails to compile
pub fn is_exposed(content: &str, dialect: Dialect, name: &str) -> Result<bool> {
    Ok(exposure_patterns(dialect, name)?
        .iter()
        .any(|pattern| pattern.is_match(content)))
}

/// Declaration binding `name` to the entry of the same name in `properties_file`
/// (relative to the root project), empty when the file or entry is missing
#[must_use]
pub fn declaration_line(dialect: Dialect, name: &str, properties_file: &str) -> String {
    match dialect {
        Dialect::Java => format!(
            r#"buildConfigField "String", "{name}", "\"${{new Properties().with {{ p -> def f = rootProject.file('{properties_file}'); if (f.exists()) f.withInputStream {{ p.load(it) }}; p.getProperty('{name}', '') }}}}\"""#
        ),
        Dialect::Kotlin => format!(
            r#"buildConfigField("String", "{name}", "\"${{java.util.Properties().apply {{ rootProject.file("{properties_file}").takeIf {{ it.exists() }}?.inputStream()?.use {{ load(it) }} }}.getProperty("{name}", "")}}\"")"#
        ),
    }
}

/// Insert the declaration for `name`, read from `properties_file`, into the
/// top-level `android` block
///
/// The line is appended to an existing `defaultConfig` block inside `android`;
/// without one, a new `defaultConfig` block is opened right after `android {`.
/// Returns `None` when there is no balanced top-level `android` block.
///
/// # Errors
///
/// Returns an error if an anchor pattern fails to compile
pub fn expose(
    content: &str,
    dialect: Dialect,
    name: &str,
    properties_file: &str,
) -> Result<Option<String>> {
    let Some(android) = anchor_regex(dialect, AnchorKind::AndroidBlock)?.find(content) else {
        return Ok(None);
    };
    let Some(android_close) = matching_brace(content, android.end() - 1) else {
        return Ok(None);
    };
    let declaration = declaration_line(dialect, name, properties_file);

    let body = &content[android.end()..android_close];
    if let Some(default_config) = anchor_regex(dialect, AnchorKind::DefaultConfig)?.find(body) {
        let open = android.end() + default_config.end() - 1;
        if let Some(close) = matching_brace(content, open) {
            return Ok(Some(append_to_block(content, close, &declaration)));
        }
        return Ok(None);
    }

    let block = format!("\n{INDENT}defaultConfig {{\n{INDENT}{INDENT}{declaration}\n{INDENT}}}");
    let mut result = String::with_capacity(content.len() + block.len());
    result.push_str(&content[..android.end()]);
    result.push_str(&block);
    result.push_str(&content[android.end()..]);
    Ok(Some(result))
}

/// Insert `line` as the last statement of the block closed at `close`
fn append_to_block(content: &str, close: usize, line: &str) -> String {
    let line_start = content[..close].rfind('\n').map_or(0, |i| i + 1);
    let before_brace = &content[line_start..close];

    let (at, text) = if before_brace.trim().is_empty() {
        // Closing brace on its own line: nest one level deeper than it
        (line_start, format!("{before_brace}{INDENT}{line}\n"))
    } else {
        let indent: String = before_brace.chars().take_while(|c| c.is_whitespace()).collect();
        (close, format!("\n{indent}{INDENT}{line}\n{indent}"))
    };

    let mut result = String::with_capacity(content.len() + text.len());
    result.push_str(&content[..at]);
    result.push_str(&text);
    result.push_str(&content[at..]);
    result
}
