//! Syntax dialect of a build script or source file

use crate::utils::fs::file_extension;
use std::path::Path;

/// The two syntax families uxgraft writes
///
/// `Java` covers Groovy Gradle scripts and `.java` sources, `Kotlin` covers
/// Kotlin DSL scripts (`.gradle.kts`) and `.kt` sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Java,
    Kotlin,
}

impl Dialect {
    /// Infer the dialect from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match file_extension(path).as_deref() {
            Some("kts" | "kt") => Self::Kotlin,
            _ => Self::Java,
        }
    }

    /// Whether `path` is a Kotlin or Java source file
    #[must_use]
    pub fn is_source_file(path: &Path) -> bool {
        matches!(file_extension(path).as_deref(), Some("kt" | "java"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Dialect::from_path(Path::new("app/build.gradle.kts")), Dialect::Kotlin);
        assert_eq!(Dialect::from_path(Path::new("app/build.gradle")), Dialect::Java);
        assert_eq!(Dialect::from_path(Path::new("MainActivity.kt")), Dialect::Kotlin);
        assert_eq!(Dialect::from_path(Path::new("App.java")), Dialect::Java);
    }

    #[test]
    fn test_is_source_file() {
        assert!(Dialect::is_source_file(Path::new("a/App.kt")));
        assert!(Dialect::is_source_file(Path::new("a/App.java")));
        assert!(!Dialect::is_source_file(Path::new("a/build.gradle.kts")));
        assert!(!Dialect::is_source_file(Path::new("a/AndroidManifest.xml")));
    }
}
