//! Path validation for project layout overrides

use crate::error::GraftError;
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep leading '..' so escapes stay visible
                if components.is_empty()
                    || matches!(components.last(), Some(Component::ParentDir))
                {
                    components.push(component);
                } else {
                    components.pop();
                }
            }
            _ => {
                components.push(component);
            }
        }
    }

    components.iter().collect()
}

/// Validate that a layout path stays inside the project root
///
/// # Errors
///
/// Returns a configuration error if the path is empty, absolute, or escapes the
/// project root through `..` components
pub fn validate_relative_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(GraftError::configuration("Layout path cannot be empty").into());
    }

    let path_obj = Path::new(path);
    if path_obj.is_absolute() {
        return Err(GraftError::configuration(format!(
            "Layout paths must be relative to the project root: '{path}'"
        ))
        .into());
    }

    let normalized = normalize_path(path_obj);
    if matches!(normalized.components().next(), Some(Component::ParentDir)) {
        return Err(GraftError::configuration(format!(
            "Path escapes the project root: '{path}' -> '{}'",
            normalized.display()
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("app/./src/../build.gradle")), PathBuf::from("app/build.gradle"));
        assert_eq!(normalize_path(Path::new("../../x")), PathBuf::from("../../x"));
    }

    #[test]
    fn test_validate_relative_path() {
        validate_relative_path("app/build.gradle").unwrap();
        validate_relative_path("mobile/../app/build.gradle").unwrap();
        assert!(validate_relative_path("").is_err());
        assert!(validate_relative_path("/etc/passwd").is_err());
        assert!(validate_relative_path("app/../../outside").is_err());
    }
}
