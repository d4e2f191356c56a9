//! File system helpers shared by the patching steps

use crate::error::GraftError;
use crate::system::System;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Read a whole text file, mapping failures to a filesystem error naming the path
pub fn read_text(system: &dyn System, path: &Path) -> Result<String> {
    system.read_to_string(path).map_err(|err| {
        GraftError::filesystem(format!("Failed to read {}: {err}", path.display())).into()
    })
}

/// Overwrite a whole text file, mapping failures to a filesystem error naming the path
///
/// Missing parent directories are created first, so a relocated secrets file can be
/// written on first use.
pub fn write_text(system: &dyn System, path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !system.is_dir(parent).unwrap_or(false)
    {
        system.create_dir_all(parent).map_err(|err| {
            GraftError::filesystem(format!("Failed to create {}: {err}", parent.display()))
        })?;
    }
    debug!("Writing {} ({} bytes)", path.display(), contents.len());
    system.write(path, contents.as_bytes()).map_err(|err| {
        GraftError::filesystem(format!("Failed to write {}: {err}", path.display())).into()
    })
}

/// Check whether a regular file exists at `path`
pub fn file_exists(system: &dyn System, path: &Path) -> Result<bool> {
    system.is_file(path).map_err(|err| {
        GraftError::filesystem(format!("Failed to inspect {}: {err}", path.display())).into()
    })
}

/// Lowercased extension of `path`, if any
#[must_use]
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn test_read_missing_file_is_filesystem_error() {
        let system = MockSystem::new();
        let err = read_text(&system, Path::new("/nope.txt")).unwrap_err();
        let graft = err.downcast_ref::<GraftError>().unwrap();
        assert_eq!(graft.exit_code(), 2);
        assert!(err.to_string().contains("/nope.txt"));
    }

    #[test]
    fn test_write_then_read() {
        let system = MockSystem::new().with_dir("/p").unwrap();
        write_text(&system, Path::new("/p/a.txt"), "hello").unwrap();
        assert!(file_exists(&system, Path::new("/p/a.txt")).unwrap());
        assert_eq!(read_text(&system, Path::new("/p/a.txt")).unwrap(), "hello");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let system = MockSystem::new();
        write_text(&system, Path::new("/p/config/secrets.properties"), "A=1\n").unwrap();
        assert!(system.is_dir(Path::new("/p/config")).unwrap());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("a/build.gradle.KTS")), Some("kts".to_owned()));
        assert_eq!(file_extension(Path::new("Main.java")), Some("java".to_owned()));
        assert_eq!(file_extension(Path::new(".gitignore")), None);
    }
}
