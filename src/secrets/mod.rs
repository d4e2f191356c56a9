//! Key resolver
//!
//! Classifies the caller's key reference, keeps the secret in `local.properties`
//! and exposes it to code as a `BuildConfig` string field.

pub mod build_config;
pub mod classify;
pub mod properties;
pub mod resolver;

pub use classify::{BUILD_CONFIG_PREFIX, DEFAULT_SECRET_NAME, KeyRef};
pub use resolver::{KeyResolution, resolve_key};
