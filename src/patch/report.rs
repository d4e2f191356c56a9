//! Per-step results and their rendering

use core::fmt;
use std::path::{Path, PathBuf};

/// Prefix for a step that changed a file
pub const SUCCESS_PREFIX: &str = "✔️";
/// Prefix for a step that found nothing to do
pub const INFO_PREFIX: &str = "ℹ️";
/// Prefix for a step that could not proceed
pub const WARNING_PREFIX: &str = "⚠️";

/// What happened in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// The file was changed
    Applied,
    /// The marker was already there, nothing written
    AlreadyPresent,
    /// No candidate file exists
    TargetMissing,
    /// The file exists but the structural anchor was not found
    AnchorNotFound,
    /// A precondition (usually the app key) is unmet; guidance in `detail`
    Blocked,
}

impl ReportKind {
    /// Status prefix used in the combined summary
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Applied => SUCCESS_PREFIX,
            Self::AlreadyPresent => INFO_PREFIX,
            Self::TargetMissing | Self::AnchorNotFound | Self::Blocked => WARNING_PREFIX,
        }
    }

    /// Whether this outcome leaves the step satisfied
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Applied | Self::AlreadyPresent)
    }
}

/// Tagged result of a single patching step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: ReportKind,
    pub file: Option<PathBuf>,
    pub detail: String,
}

impl StepReport {
    /// Create a report without an associated file
    pub fn new<S: Into<String>>(kind: ReportKind, detail: S) -> Self {
        Self {
            kind,
            file: None,
            detail: detail.into(),
        }
    }

    /// Create a report about `file`
    pub fn for_file<S: Into<String>>(kind: ReportKind, file: &Path, detail: S) -> Self {
        Self {
            kind,
            file: Some(file.to_path_buf()),
            detail: detail.into(),
        }
    }

    pub fn applied<S: Into<String>>(file: &Path, detail: S) -> Self {
        Self::for_file(ReportKind::Applied, file, detail)
    }

    pub fn already_present<S: Into<String>>(file: &Path, detail: S) -> Self {
        Self::for_file(ReportKind::AlreadyPresent, file, detail)
    }

    pub fn target_missing<S: Into<String>>(detail: S) -> Self {
        Self::new(ReportKind::TargetMissing, detail)
    }

    pub fn anchor_not_found<S: Into<String>>(file: &Path, detail: S) -> Self {
        Self::for_file(ReportKind::AnchorNotFound, file, detail)
    }

    pub fn blocked<S: Into<String>>(detail: S) -> Self {
        Self::new(ReportKind::Blocked, detail)
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            return Ok(());
        }
        write!(f, "{} {}", self.kind.prefix(), self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        let applied = StepReport::applied(Path::new("settings.gradle"), "Added repo");
        assert_eq!(applied.to_string(), "✔️ Added repo");
        let info = StepReport::already_present(Path::new("settings.gradle"), "Repo present");
        assert_eq!(info.to_string(), "ℹ️ Repo present");
        assert_eq!(StepReport::blocked("No key").to_string(), "⚠️ No key");
    }

    #[test]
    fn test_empty_detail_renders_empty() {
        assert_eq!(StepReport::blocked("").to_string(), "");
    }
}
