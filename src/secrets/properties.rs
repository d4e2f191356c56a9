//! Secret storage in `local.properties` and its `.gitignore` entry

use crate::config::ProjectLayout;
use crate::patch::StepReport;
use crate::system::System;
use crate::utils::fs::{file_exists, read_text, write_text};
use anyhow::Result;
use tracing::{debug, info};

/// Split a properties line into trimmed key and value
///
/// Comment lines (`#`, `!`) and lines without a separator yield `None`.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return None;
    }
    let split_at = trimmed.find(['=', ':'])?;
    Some((trimmed[..split_at].trim(), trimmed[split_at + 1..].trim()))
}

/// Value stored under `name`, if any
#[must_use]
pub fn lookup(content: &str, name: &str) -> Option<String> {
    content
        .lines()
        .filter_map(parse_line)
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// `content` with exactly one `name=value` line
///
/// The first existing line for `name` is replaced in place and later duplicates
/// are dropped; without one, the line is appended.
#[must_use]
pub fn upsert(content: &str, name: &str, value: &str) -> String {
    let entry = format!("{name}={value}");
    let mut replaced = false;
    let mut result = String::with_capacity(content.len() + entry.len() + 1);

    for line in content.split_inclusive('\n') {
        let is_entry = parse_line(line).is_some_and(|(key, _)| key == name);
        if !is_entry {
            result.push_str(line);
            continue;
        }
        if !replaced {
            result.push_str(&entry);
            if line.ends_with('\n') {
                result.push('\n');
            }
            replaced = true;
        }
    }

    if !replaced {
        if !result.is_empty() && !result.ends_with('\n') {
            result.push('\n');
        }
        result.push_str(&entry);
        result.push('\n');
    }
    result
}

/// Secret stored under `name` in the project's `local.properties`
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read
pub fn read_secret(system: &dyn System, layout: &ProjectLayout, name: &str) -> Result<Option<String>> {
    let path = layout.local_properties();
    if !file_exists(system, &path)? {
        return Ok(None);
    }
    Ok(lookup(&read_text(system, &path)?, name).filter(|value| !value.is_empty()))
}

/// Store `value` under `name` in `local.properties`, creating the file if needed
///
/// # Errors
///
/// Returns an error if the file cannot be read or written
pub fn store_secret(
    system: &dyn System,
    layout: &ProjectLayout,
    name: &str,
    value: &str,
) -> Result<StepReport> {
    let path = layout.local_properties();
    let shown = layout.display(&path);
    let content = if file_exists(system, &path)? {
        read_text(system, &path)?
    } else {
        String::new()
    };

    if lookup(&content, name).as_deref() == Some(value) {
        debug!("{name} already stored in {shown}");
        return Ok(StepReport::already_present(
            &path,
            format!("{name} already stored in {shown}"),
        ));
    }

    write_text(system, &path, &upsert(&content, name, value))?;
    info!("Stored {name} in {shown}");
    Ok(StepReport::applied(&path, format!("Stored app key as {name} in {shown}")))
}

/// Make sure `.gitignore` lists the secrets file, creating `.gitignore` if needed
///
/// # Errors
///
/// Returns an error if the file cannot be read or written
pub fn ensure_gitignored(system: &dyn System, layout: &ProjectLayout) -> Result<StepReport> {
    let path = layout.gitignore();
    let shown = layout.display(&path);
    let entry = layout.local_properties_entry();
    let content = if file_exists(system, &path)? {
        read_text(system, &path)?
    } else {
        String::new()
    };

    let listed = content.lines().map(str::trim).any(|line| {
        line == entry || line.strip_prefix('/') == Some(entry.as_str())
    });
    if listed {
        return Ok(StepReport::already_present(
            &path,
            format!("{entry} already listed in {shown}"),
        ));
    }

    let mut updated = content;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&entry);
    updated.push('\n');
    write_text(system, &path, &updated)?;
    info!("Added {entry} to {shown}");
    Ok(StepReport::applied(&path, format!("Added {entry} to {shown}")))
}
