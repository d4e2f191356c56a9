//! File locator
//!
//! Picks the one file per role that later steps patch: the settings script, the
//! app build script, and the source file holding the app's entry point.

pub mod entry;
pub mod manifest;

pub use entry::{EntryKind, EntrySource, find_application_source, find_entry_source, find_launcher_activity};
pub use manifest::launcher_activity_name;

use crate::config::ProjectLayout;
use crate::system::System;
use crate::utils::fs::file_exists;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// First existing path among `candidates`
///
/// # Errors
///
/// Returns an error if a candidate cannot be inspected
pub fn first_existing(system: &dyn System, candidates: &[PathBuf]) -> Result<Option<PathBuf>> {
    for candidate in candidates {
        if file_exists(system, candidate)? {
            debug!("Selected {}", candidate.display());
            return Ok(Some(candidate.clone()));
        }
    }
    Ok(None)
}

/// `settings.gradle.kts` if present, else `settings.gradle`
///
/// # Errors
///
/// Returns an error if a candidate cannot be inspected
pub fn resolve_settings(system: &dyn System, layout: &ProjectLayout) -> Result<Option<PathBuf>> {
    first_existing(system, &layout.settings_candidates())
}

/// `app/build.gradle.kts` if present, else `app/build.gradle`
///
/// # Errors
///
/// Returns an error if a candidate cannot be inspected
pub fn resolve_app_build(system: &dyn System, layout: &ProjectLayout) -> Result<Option<PathBuf>> {
    first_existing(system, &layout.app_build_candidates())
}
