use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for uxgraft
#[derive(Parser, Debug, Clone)]
#[command(name = "uxgraft")]
#[command(about = "Wire the UXCam SDK into an Android project")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Root of the Android project
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub project_root: PathBuf,

    /// Configuration file path (defaults to uxgraft.yaml in the project root, if present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Patch the project once and print the summary
    Apply {
        /// App key reference: BuildConfig.NAME, a local.properties name, or the key itself
        #[arg(long, value_name = "REF", default_value = "", env = "UXCAM_APP_KEY_REF")]
        key: String,
    },

    /// Serve the add_uxcam_android tool over stdio (MCP)
    Serve,
}
