//! Error handling module
//!
//! Defines the errors that abort a run, each with its own exit code

pub mod types;

pub use types::*;
