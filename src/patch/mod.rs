//! Patch engine
//!
//! Finds structural anchors in Gradle scripts and Kotlin/Java sources with regular
//! expressions and splices fixed snippets after them. Nothing here parses the host
//! language; a missing anchor is reported, never guessed around.

pub mod anchor;
pub mod dialect;
pub mod engine;
pub mod report;
pub mod snippets;

pub use anchor::{AnchorKind, anchor_regex};
pub use dialect::Dialect;
pub use engine::{BlockPatch, apply, apply_init};
pub use report::{ReportKind, StepReport};
pub use snippets::SnippetKind;
