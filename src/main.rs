//! # `uxgraft`
//!
//! `uxgraft` adds the UXCam analytics SDK to an Android project.
//!
//! ## Usage
//!
//! **One-shot:**
//! ```sh
//! uxgraft --project-root ./MyApp apply --key BuildConfig.UXCAM_KEY
//! ```
//!
//! **As a stdio tool server:**
//! ```sh
//! uxgraft --project-root ./MyApp serve
//! ```
//!
//! Logs go to stderr; stdout carries only the summary or protocol messages.

use anyhow::Result;
use clap::Parser as _;
use std::sync::Arc;
use uxgraft::cli::{Args, Command};
use uxgraft::error::GraftError;
use uxgraft::system::real::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<GraftError>()
                    .map_or(1, GraftError::exit_code),
            );
        }
    }
}

fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();
    let layout = uxgraft::load_layout(&system, &args.project_root, args.config.as_deref())?;

    match args.command {
        Command::Apply { key } => {
            let summary = uxgraft::run_apply(&system, layout, &key)?;
            // Output to stdout (not using logging)
            println!("{summary}");
            Ok(())
        }
        Command::Serve => uxgraft::run_serve(Arc::new(system), layout),
    }
}
