//! Integration operation coordination
//!
//! Runs the three steps in a fixed order: Maven repository, Gradle dependency,
//! key resolution plus init code. A step that cannot proceed reports why and the
//! next one still runs; only I/O failures abort the whole operation.

use crate::config::ProjectLayout;
use crate::locate::{EntryKind, find_entry_source, resolve_app_build, resolve_settings};
use crate::patch::{
    AnchorKind, BlockPatch, Dialect, SnippetKind, StepReport, anchor_regex, apply, apply_init,
};
use crate::patch::snippets::render;
use crate::secrets::resolve_key;
use crate::system::System;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Separator between step messages in the summary
pub const SUMMARY_SEPARATOR: &str = "; ";

/// Every step report of one run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationReport {
    pub steps: Vec<StepReport>,
}

impl IntegrationReport {
    /// One-line summary handed back to the caller
    #[must_use]
    pub fn summary(&self) -> String {
        self.steps
            .iter()
            .map(ToString::to_string)
            .filter(|message| !message.is_empty())
            .collect::<Vec<_>>()
            .join(SUMMARY_SEPARATOR)
    }

    /// Whether every step ended applied or already present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.kind.is_success())
    }
}

/// Coordinates the complete integration
#[non_exhaustive]
pub struct IntegrateOperation<'src> {
    layout: ProjectLayout,
    system: &'src dyn System,
}

impl<'src> IntegrateOperation<'src> {
    #[inline]
    pub fn new(layout: ProjectLayout, system: &'src dyn System) -> Self {
        Self { layout, system }
    }

    /// Run all steps for `key_ref`
    ///
    /// # Errors
    ///
    /// Returns an error if any file read or write fails
    pub fn execute(&self, key_ref: &str) -> Result<IntegrationReport> {
        info!("Integrating UXCam into {}", self.layout.root().display());
        let mut steps = vec![self.add_repository()?, self.add_dependency()?];
        steps.extend(self.inject_init(key_ref)?);

        let report = IntegrationReport { steps };
        debug!("Integration complete: {}", report.is_complete());
        Ok(report)
    }

    fn missing_pair(&self, candidates: &[PathBuf; 2]) -> StepReport {
        let [kts, groovy] = candidates;
        StepReport::target_missing(format!(
            "Neither {} nor {} found",
            self.layout.display(kts),
            self.layout.display(groovy)
        ))
    }

    /// Add the Maven repository to the settings script
    ///
    /// # Errors
    ///
    /// Returns an error if the settings script cannot be read or written
    pub fn add_repository(&self) -> Result<StepReport> {
        let Some(settings) = resolve_settings(self.system, &self.layout)? else {
            return Ok(self.missing_pair(&self.layout.settings_candidates()));
        };
        let dialect = Dialect::from_path(&settings);
        let patch = BlockPatch {
            label: "UXCam Maven repository",
            marker: SnippetKind::Repository.marker(),
            snippet: render(dialect, SnippetKind::Repository, None),
            anchor: anchor_regex(dialect, AnchorKind::Repositories)?,
            preferred_parent: Some(anchor_regex(dialect, AnchorKind::DependencyResolution)?),
        };
        apply(self.system, &self.layout, &settings, &patch)
    }

    /// Add the SDK dependency to the app build script
    ///
    /// # Errors
    ///
    /// Returns an error if the build script cannot be read or written
    pub fn add_dependency(&self) -> Result<StepReport> {
        let Some(build) = resolve_app_build(self.system, &self.layout)? else {
            return Ok(self.missing_pair(&self.layout.app_build_candidates()));
        };
        let dialect = Dialect::from_path(&build);
        let patch = BlockPatch {
            label: "UXCam dependency",
            marker: SnippetKind::Dependency.marker(),
            snippet: render(dialect, SnippetKind::Dependency, None),
            anchor: anchor_regex(dialect, AnchorKind::Dependencies)?,
            preferred_parent: None,
        };
        apply(self.system, &self.layout, &build, &patch)
    }

    /// Resolve the key, then add imports and the init call to the entry point
    ///
    /// # Errors
    ///
    /// Returns an error if any involved file cannot be read or written
    pub fn inject_init(&self, key_ref: &str) -> Result<Vec<StepReport>> {
        let resolution = resolve_key(self.system, &self.layout, key_ref)?;
        let mut reports = resolution.notes;
        let Some(expression) = resolution.expression else {
            return Ok(reports);
        };

        let Some(entry) = find_entry_source(self.system, &self.layout)? else {
            reports.push(StepReport::target_missing(format!(
                "No Application class or launcher activity found under {}",
                self.layout.display(&self.layout.source_root())
            )));
            return Ok(reports);
        };
        if entry.kind == EntryKind::LauncherActivity {
            info!("No Application class, using launcher activity {}", self.layout.display(&entry.path));
        }

        reports.push(apply_init(self.system, &self.layout, &entry.path, &expression)?);
        Ok(reports)
    }
}

/// Integrate UXCam into the project described by `layout`
///
/// # Errors
///
/// Returns an error if any file read or write fails
pub fn integrate(system: &dyn System, layout: &ProjectLayout, key_ref: &str) -> Result<IntegrationReport> {
    IntegrateOperation::new(layout.clone(), system).execute(key_ref)
}
