//! Text splicing around anchors
//!
//! Every mutation reads the whole file, edits it in memory and writes it back in
//! one go. Presence is decided by plain substring checks on a per-snippet marker.

use super::anchor::{AnchorKind, anchor_regex};
use super::report::StepReport;
use super::snippets::{SnippetKind, render};
use super::Dialect;
use crate::config::ProjectLayout;
use crate::system::System;
use crate::utils::fs::{file_exists, read_text, write_text};
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

/// A snippet to place right after a block opener
#[derive(Debug)]
pub struct BlockPatch<'a> {
    /// Human name of what is inserted, e.g. "UXCam Maven repository"
    pub label: &'a str,
    /// Substring that means the snippet is already there
    pub marker: &'a str,
    /// Text inserted after the anchor, starting with a newline
    pub snippet: String,
    /// Block opener to insert after
    pub anchor: Regex,
    /// Enclosing block whose nested anchor is preferred over the first match
    pub preferred_parent: Option<Regex>,
}

/// Index of the `}` closing the block whose `{` sits at `open`
///
/// Braces are counted naively; braces inside strings or comments are not skipped.
#[must_use]
pub fn matching_brace(content: &str, open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    for (offset, byte) in content.as_bytes().get(open..)?.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Insert `text` right after the first match of `anchor`
#[must_use]
pub fn insert_after_anchor(content: &str, anchor: &Regex, text: &str) -> Option<String> {
    let found = anchor.find(content)?;
    Some(splice(content, found.end(), text))
}

/// Insert `text` right after the first match of `anchor` inside the first block
/// opened by `parent`
#[must_use]
pub fn insert_in_nested_block(
    content: &str,
    parent: &Regex,
    anchor: &Regex,
    text: &str,
) -> Option<String> {
    let parent_match = parent.find(content)?;
    let open = parent_match.end().checked_sub(1)?;
    let close = matching_brace(content, open)?;
    let nested = anchor.find(&content[parent_match.end()..close])?;
    Some(splice(content, parent_match.end() + nested.end(), text))
}

fn splice(content: &str, at: usize, text: &str) -> String {
    let mut result = String::with_capacity(content.len() + text.len());
    result.push_str(&content[..at]);
    result.push_str(text);
    result.push_str(&content[at..]);
    result
}

/// Apply a block patch to `file`
///
/// # Errors
///
/// Returns an error if the file cannot be read or written
pub fn apply(
    system: &dyn System,
    layout: &ProjectLayout,
    file: &Path,
    patch: &BlockPatch<'_>,
) -> Result<StepReport> {
    let shown = layout.display(file);
    if !file_exists(system, file)? {
        return Ok(StepReport::target_missing(format!("{shown} not found")));
    }

    let content = read_text(system, file)?;
    if content.contains(patch.marker) {
        debug!("Marker '{}' found in {shown}", patch.marker);
        return Ok(StepReport::already_present(
            file,
            format!("{} already present in {shown}", patch.label),
        ));
    }

    let patched = patch
        .preferred_parent
        .as_ref()
        .and_then(|parent| insert_in_nested_block(&content, parent, &patch.anchor, &patch.snippet))
        .or_else(|| insert_after_anchor(&content, &patch.anchor, &patch.snippet));

    let Some(patched) = patched else {
        return Ok(StepReport::anchor_not_found(
            file,
            format!(
                "No block for the {} found in {shown}; add it manually",
                patch.label
            ),
        ));
    };

    write_text(system, file, &patched)?;
    info!("Added {} in {shown}", patch.label);
    Ok(StepReport::applied(file, format!("Added {} in {shown}", patch.label)))
}

/// Add the SDK imports unless they are already present
///
/// The imports go after the first `package` line, or before the first `import` line
/// when that comes first, or at the top of the file otherwise. Returns `None` when
/// the import marker is already present.
#[must_use]
pub fn insert_imports(content: &str, dialect: Dialect) -> Option<String> {
    if content.contains(SnippetKind::Imports.marker()) {
        return None;
    }
    let imports = render(dialect, SnippetKind::Imports, None);
    let imports = imports.trim_start_matches('\n');

    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with("package ") {
            let end = offset + line.len();
            let text = if line.ends_with('\n') {
                format!("\n{imports}\n")
            } else {
                format!("\n\n{imports}\n")
            };
            return Some(splice(content, end, &text));
        }
        if trimmed.starts_with("import ") {
            return Some(splice(content, offset, &format!("{imports}\n")));
        }
        offset += line.len();
    }

    Some(format!("{imports}\n\n{content}"))
}

/// Add the init snippet inside `onCreate`
///
/// The snippet goes after the `super.onCreate(...)` call when one follows the
/// signature, otherwise right after the opening brace. Returns `None` when no
/// `onCreate` signature matches.
///
/// # Errors
///
/// Returns an error if an anchor pattern fails to compile
pub fn insert_init(content: &str, dialect: Dialect, key_expression: &str) -> Result<Option<String>> {
    let signature = anchor_regex(dialect, AnchorKind::OnCreate)?;
    let Some(found) = signature.find(content) else {
        return Ok(None);
    };
    let super_call = anchor_regex(dialect, AnchorKind::SuperOnCreate)?;
    let at = super_call
        .find(&content[found.end()..])
        .map_or(found.end(), |call| found.end() + call.end());

    let snippet = render(dialect, SnippetKind::Init, Some(key_expression));
    Ok(Some(splice(content, at, &snippet)))
}

/// Insert imports and the init call into an entry-point source file with one write
///
/// # Errors
///
/// Returns an error if the file cannot be read or written
pub fn apply_init(
    system: &dyn System,
    layout: &ProjectLayout,
    file: &Path,
    key_expression: &str,
) -> Result<StepReport> {
    let shown = layout.display(file);
    if !file_exists(system, file)? {
        return Ok(StepReport::target_missing(format!("{shown} not found")));
    }

    let content = read_text(system, file)?;
    if content.contains(SnippetKind::Init.marker()) {
        return Ok(StepReport::already_present(
            file,
            format!("Init already present in {shown}"),
        ));
    }

    let dialect = Dialect::from_path(file);
    let with_imports = insert_imports(&content, dialect).unwrap_or(content);
    let Some(patched) = insert_init(&with_imports, dialect, key_expression)? else {
        return Ok(StepReport::anchor_not_found(
            file,
            format!("No onCreate() found in {shown}; add the UXCam init call manually"),
        ));
    };

    write_text(system, file, &patched)?;
    info!("Inserted init code in {shown}");
    Ok(StepReport::applied(file, format!("Inserted init code in {shown}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_brace() {
        let text = "a { b { c } d } e";
        assert_eq!(matching_brace(text, 2), Some(14));
        assert_eq!(matching_brace(text, 6), Some(10));
        assert_eq!(matching_brace("{ {", 0), None);
    }

    #[test]
    fn test_insert_after_anchor() {
        let anchor = Regex::new(r"repositories\s*\{").unwrap();
        let out = insert_after_anchor("repositories {\n}\n", &anchor, "\n    x").unwrap();
        assert_eq!(out, "repositories {\n    x\n}\n");
        assert!(insert_after_anchor("plugins {}\n", &anchor, "x").is_none());
    }

    #[test]
    fn test_insert_in_nested_block_skips_earlier_match() {
        let content = "pluginManagement {\n    repositories {\n    }\n}\ndependencyResolutionManagement {\n    repositories {\n    }\n}\n";
        let parent = Regex::new(r"dependencyResolutionManagement\s*\{").unwrap();
        let anchor = Regex::new(r"repositories\s*\{").unwrap();
        let out = insert_in_nested_block(content, &parent, &anchor, "\n        X").unwrap();
        assert!(out.contains("dependencyResolutionManagement {\n    repositories {\n        X\n"));
        assert!(out.starts_with("pluginManagement {\n    repositories {\n    }"));
    }

    #[test]
    fn test_insert_imports_after_package() {
        let out = insert_imports("package com.example\n\nclass App\n", Dialect::Kotlin).unwrap();
        assert_eq!(
            out,
            "package com.example\n\nimport com.uxcam.UXCam\nimport com.uxcam.datamodel.UXConfig\n\nclass App\n"
        );
    }

    #[test]
    fn test_insert_imports_before_first_import() {
        let out = insert_imports("import android.app.Application;\n", Dialect::Java).unwrap();
        assert!(out.starts_with("import com.uxcam.UXCam;\nimport com.uxcam.datamodel.UXConfig;\nimport android.app.Application;"));
    }

    #[test]
    fn test_insert_imports_when_present() {
        assert!(insert_imports("import com.uxcam.UXCam\n", Dialect::Kotlin).is_none());
    }

    #[test]
    fn test_insert_init_after_super_call() {
        let content = "class App : Application() {\n    override fun onCreate() {\n        super.onCreate()\n        other()\n    }\n}\n";
        let out = insert_init(content, Dialect::Kotlin, "BuildConfig.UXCAM_KEY").unwrap().unwrap();
        let super_at = out.find("super.onCreate()").unwrap();
        let init_at = out.find("val uxcamKey = BuildConfig.UXCAM_KEY").unwrap();
        let other_at = out.find("other()").unwrap();
        assert!(super_at < init_at && init_at < other_at);
    }

    #[test]
    fn test_insert_init_without_super_call() {
        let content = "public class App extends Application {\n    public void onCreate() {\n        other();\n    }\n}\n";
        let out = insert_init(content, Dialect::Java, "BuildConfig.UXCAM_KEY").unwrap().unwrap();
        assert!(out.contains("public void onCreate() {\n        String uxcamKey = BuildConfig.UXCAM_KEY;"));
    }

    #[test]
    fn test_insert_init_without_on_create() {
        assert!(insert_init("class App\n", Dialect::Kotlin, "k").unwrap().is_none());
    }
}
