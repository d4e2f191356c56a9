//! Anchor patterns keyed by dialect and anchor kind
//!
//! All structural matching lives here so each rule can be tested on plain strings.

use super::Dialect;
use anyhow::Result;
use regex::Regex;

/// A structural landmark in a build script or source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// `repositories {`
    Repositories,
    /// `dependencyResolutionManagement {` in a settings script
    DependencyResolution,
    /// `dependencies {`
    Dependencies,
    /// Signature of the `onCreate` override up to its opening brace
    OnCreate,
    /// `super.onCreate(...)` call
    SuperOnCreate,
    /// Top-level `android {`
    AndroidBlock,
    /// `defaultConfig {`
    DefaultConfig,
}

/// Raw pattern for `kind` in `dialect`
#[must_use]
pub const fn anchor_pattern(dialect: Dialect, kind: AnchorKind) -> &'static str {
    match (dialect, kind) {
        (_, AnchorKind::Repositories) => r"\brepositories\s*\{",
        (_, AnchorKind::DependencyResolution) => r"\bdependencyResolutionManagement\s*\{",
        (_, AnchorKind::Dependencies) => r"\bdependencies\s*\{",
        (Dialect::Kotlin, AnchorKind::OnCreate) => {
            r"\bfun\s+onCreate\s*\([^)]*\)\s*(?::\s*Unit\s*)?\{"
        }
        (Dialect::Java, AnchorKind::OnCreate) => {
            r"\bvoid\s+onCreate\s*\([^)]*\)\s*(?:throws\s+[\w.,\s]+?)?\{"
        }
        (Dialect::Kotlin, AnchorKind::SuperOnCreate) => r"\bsuper\.onCreate\s*\([^)]*\)",
        (Dialect::Java, AnchorKind::SuperOnCreate) => r"\bsuper\.onCreate\s*\([^)]*\)\s*;",
        (_, AnchorKind::AndroidBlock) => r"(?m)^android\s*\{",
        (_, AnchorKind::DefaultConfig) => r"\bdefaultConfig\s*\{",
    }
}

/// Compiled regex for `kind` in `dialect`
///
/// # Errors
///
/// Returns an error if the pattern fails to compile
pub fn anchor_regex(dialect: Dialect, kind: AnchorKind) -> Result<Regex> {
    Ok(Regex::new(anchor_pattern(dialect, kind))?)
}
