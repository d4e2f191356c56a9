//! Custom error types with exit codes

use thiserror::Error;

/// Errors that abort a uxgraft invocation
///
/// Missing files, unmatched anchors and unresolved keys are not errors; they are
/// reported as [`crate::patch::StepReport`] values. Only conditions that stop the
/// whole run end up here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GraftError {
    /// Configuration Error - invalid layout overrides or CLI input
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem Error - a read or write failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },

    /// Protocol Error - the stdio tool host sent something we cannot serve
    #[error("Protocol error: {message}")]
    Protocol { message: String },
}

impl GraftError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Filesystem { .. } => 2,
            Self::Protocol { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Create a protocol error
    #[inline]
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
