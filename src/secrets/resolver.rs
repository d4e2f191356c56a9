//! Turns the caller's key reference into a `BuildConfig` expression

use super::build_config::{expose, is_exposed};
use super::classify::{BUILD_CONFIG_PREFIX, DEFAULT_SECRET_NAME, KeyRef};
use super::properties::{ensure_gitignored, read_secret, store_secret};
use crate::config::ProjectLayout;
use crate::locate::resolve_app_build;
use crate::patch::{Dialect, StepReport};
use crate::system::System;
use crate::utils::fs::{read_text, write_text};
use anyhow::Result;
use tracing::{debug, info};

/// Outcome of key resolution
///
/// `expression` is set when init code may be inserted. `notes` lists what was
/// stored or exposed along the way and, when blocked, the guidance to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyResolution {
    pub expression: Option<String>,
    pub notes: Vec<StepReport>,
}

impl KeyResolution {
    fn resolved(name: &str, notes: Vec<StepReport>) -> Self {
        Self {
            expression: Some(format!("{BUILD_CONFIG_PREFIX}{name}")),
            notes,
        }
    }

    fn blocked(mut notes: Vec<StepReport>, report: StepReport) -> Self {
        notes.push(report);
        Self {
            expression: None,
            notes,
        }
    }
}

fn no_key_guidance(layout: &ProjectLayout) -> String {
    let file = layout.local_properties_entry();
    format!(
        "No UXCam app key provided.\n\
        Add `{DEFAULT_SECRET_NAME}=<your app key>` to {file} (it is kept out of git), \
        then run again with `{BUILD_CONFIG_PREFIX}{DEFAULT_SECRET_NAME}`.\n\
        You can also pass the key itself and it will be stored there for you."
    )
}

fn missing_secret_guidance(layout: &ProjectLayout, name: &str) -> String {
    let file = layout.local_properties_entry();
    format!(
        "Secret {name} not found in {file}.\n\
        Add `{name}=<your app key>` to {file}, then run again with `{BUILD_CONFIG_PREFIX}{name}`."
    )
}

/// Resolve `input` into a key expression, storing and exposing the secret as needed
///
/// # Errors
///
/// Returns an error if a file cannot be read or written
pub fn resolve_key(system: &dyn System, layout: &ProjectLayout, input: &str) -> Result<KeyResolution> {
    match KeyRef::classify(input) {
        KeyRef::Empty => {
            debug!("No key reference given");
            Ok(KeyResolution::blocked(
                Vec::new(),
                StepReport::blocked(no_key_guidance(layout)),
            ))
        }
        KeyRef::BuildConfig(name) | KeyRef::Variable(name) => resolve_named(system, layout, &name),
        KeyRef::Literal(value) => {
            debug!("Key reference classified as a literal key");
            let notes = vec![
                store_secret(system, layout, DEFAULT_SECRET_NAME, &value)?,
                ensure_gitignored(system, layout)?,
            ];
            expose_named(system, layout, DEFAULT_SECRET_NAME, notes)
        }
    }
}

fn resolve_named(system: &dyn System, layout: &ProjectLayout, name: &str) -> Result<KeyResolution> {
    if let Some(build) = resolve_app_build(system, layout)?
        && is_exposed(&read_text(system, &build)?, Dialect::from_path(&build), name)?
    {
        debug!("{name} already exposed in {}", layout.display(&build));
        return Ok(KeyResolution::resolved(name, Vec::new()));
    }

    if read_secret(system, layout, name)?.is_none() {
        info!("Secret {name} not found");
        return Ok(KeyResolution::blocked(
            Vec::new(),
            StepReport::blocked(missing_secret_guidance(layout, name)),
        ));
    }

    expose_named(system, layout, name, Vec::new())
}

fn expose_named(
    system: &dyn System,
    layout: &ProjectLayout,
    name: &str,
    mut notes: Vec<StepReport>,
) -> Result<KeyResolution> {
    let Some(build) = resolve_app_build(system, layout)? else {
        let [kts, groovy] = layout.app_build_candidates();
        return Ok(KeyResolution::blocked(
            notes,
            StepReport::target_missing(format!(
                "Neither {} nor {} found; cannot expose {name} as {BUILD_CONFIG_PREFIX}{name}",
                layout.display(&kts),
                layout.display(&groovy)
            )),
        ));
    };
    let shown = layout.display(&build);
    let dialect = Dialect::from_path(&build);
    let content = read_text(system, &build)?;

    if is_exposed(&content, dialect, name)? {
        notes.push(StepReport::already_present(
            &build,
            format!("{BUILD_CONFIG_PREFIX}{name} already declared in {shown}"),
        ));
        return Ok(KeyResolution::resolved(name, notes));
    }

    let Some(patched) = expose(&content, dialect, name, &layout.local_properties_entry())? else {
        return Ok(KeyResolution::blocked(
            notes,
            StepReport::anchor_not_found(
                &build,
                format!("No top-level android {{ }} block in {shown}; declare {BUILD_CONFIG_PREFIX}{name} manually"),
            ),
        ));
    };

    write_text(system, &build, &patched)?;
    info!("Exposed {name} as a BuildConfig field in {shown}");
    notes.push(StepReport::applied(
        &build,
        format!("Exposed {name} as {BUILD_CONFIG_PREFIX}{name} in {shown}"),
    ));
    Ok(KeyResolution::resolved(name, notes))
}
