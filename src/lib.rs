//! `uxgraft` - wires the UXCam SDK into Android projects
//!
//! This library patches Gradle scripts and Kotlin/Java sources by text: it adds
//! the UXCam Maven repository and dependency, keeps the app key in
//! `local.properties`, exposes it as a `BuildConfig` field and inserts the init
//! call into the app's entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod locate;
pub mod operations;
pub mod patch;
pub mod secrets;
pub mod server;
pub mod system;
pub mod utils;

use anyhow::Result;
use config::ProjectLayout;
use error::GraftError;
use operations::IntegrateOperation;
use server::UxcamServer;
use std::path::Path;
use std::sync::Arc;
use system::System;

/// Load the project layout for the CLI arguments
pub fn load_layout(system: &dyn System, root: &Path, config: Option<&Path>) -> Result<ProjectLayout> {
    ProjectLayout::load(system, root, config)
}

/// Run one integration and return the summary
pub fn run_apply(system: &dyn System, layout: ProjectLayout, key_ref: &str) -> Result<String> {
    let operation = IntegrateOperation::new(layout, system);
    Ok(operation.execute(key_ref)?.summary())
}

/// Serve the tool over stdin/stdout until stdin closes
pub fn run_serve(system: Arc<dyn System>, layout: ProjectLayout) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| GraftError::protocol(format!("Failed to start async runtime: {e}")))?;
    runtime.block_on(server::serve_stdio(UxcamServer::new(system, layout)))
}
