//! Entry-point source discovery

use super::manifest::{launcher_activity_name, simple_name};
use crate::config::ProjectLayout;
use crate::patch::Dialect;
use crate::system::System;
use crate::utils::fs::{file_exists, read_text};
use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// The trailing `[^.]` keeps nested types such as `Application.ActivityLifecycleCallbacks` out
const APPLICATION_SUBCLASS: &str =
    r"\bclass\s+\w+[^{;]*?(?::|\bextends\b)\s*(?:[\w.]+\.)?(?:MultiDex)?Application\b(?:[^.]|$)";

const ACTIVITY_SUBCLASS: &str =
    r"\bclass\s+\w+[^{;]*?(?::|\bextends\b)\s*(?:[\w.]+\.)?\w*Activity\b(?:[^.]|$)";

/// How the entry-point file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A subclass of `android.app.Application`
    Application,
    /// The activity the manifest declares as launcher
    LauncherActivity,
}

/// Source file that receives the init call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySource {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Source set searched before any other
const MAIN_SOURCE_SET: &str = "main";

/// Kotlin and Java files under `root`, `main/` first and then the other source
/// sets, each sorted by path; empty when `root` is absent
fn source_files(system: &dyn System, root: &Path) -> Result<Vec<PathBuf>> {
    if !system.is_dir(root)? {
        debug!("Source root {} does not exist", root.display());
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = system
        .walk_dir(root)?
        .into_iter()
        .filter(|entry| entry.is_file && Dialect::is_source_file(&entry.path))
        .map(|entry| entry.path)
        .collect();
    // Stable, so the walk order survives inside each group
    files.sort_by_key(|path| {
        !path
            .strip_prefix(root)
            .is_ok_and(|relative| relative.starts_with(MAIN_SOURCE_SET))
    });
    Ok(files)
}

/// First source file declaring an `Application` subclass
///
/// # Errors
///
/// Returns an error if the source tree cannot be walked or a file cannot be read
pub fn find_application_source(system: &dyn System, layout: &ProjectLayout) -> Result<Option<PathBuf>> {
    let marker = Regex::new(APPLICATION_SUBCLASS)?;
    for path in source_files(system, &layout.source_root())? {
        if marker.is_match(&read_text(system, &path)?) {
            info!("Application class found in {}", layout.display(&path));
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Source file of the launcher activity declared in the manifest
///
/// # Errors
///
/// Returns an error if the manifest or a candidate source cannot be read
pub fn find_launcher_activity(system: &dyn System, layout: &ProjectLayout) -> Result<Option<PathBuf>> {
    let manifest = layout.manifest();
    if !file_exists(system, &manifest)? {
        debug!("No manifest at {}", manifest.display());
        return Ok(None);
    }

    let Some(component) = launcher_activity_name(&read_text(system, &manifest)?)? else {
        debug!("Manifest declares no launcher activity");
        return Ok(None);
    };
    let name = simple_name(&component);
    debug!("Launcher activity declared as {component}");

    let marker = Regex::new(ACTIVITY_SUBCLASS)?;
    for path in source_files(system, &layout.source_root())? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !file_name.contains(name) {
            continue;
        }
        let content = read_text(system, &path)?;
        if content.contains(name) && marker.is_match(&content) {
            info!("Launcher activity found in {}", layout.display(&path));
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Application subclass if there is one, otherwise the launcher activity
///
/// # Errors
///
/// Returns an error if a file cannot be read
pub fn find_entry_source(system: &dyn System, layout: &ProjectLayout) -> Result<Option<EntrySource>> {
    if let Some(path) = find_application_source(system, layout)? {
        return Ok(Some(EntrySource {
            path,
            kind: EntryKind::Application,
        }));
    }
    Ok(find_launcher_activity(system, layout)?.map(|path| EntrySource {
        path,
        kind: EntryKind::LauncherActivity,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_marker() {
        let marker = Regex::new(APPLICATION_SUBCLASS).unwrap();
        assert!(marker.is_match("class App : Application() {"));
        assert!(marker.is_match("@HiltAndroidApp\nclass App @Inject constructor() : Application()"));
        assert!(marker.is_match("public class App extends android.app.Application {"));
        assert!(marker.is_match("class App : MultiDexApplication()"));
        assert!(!marker.is_match("class MainActivity : AppCompatActivity() {"));
        assert!(!marker.is_match("val app = context as Application"));
        assert!(!marker.is_match("class ActivityTracker : Application.ActivityLifecycleCallbacks {"));
        assert!(!marker.is_match(
            "class Tracker implements android.app.Application.ActivityLifecycleCallbacks {"
        ));
        assert!(marker.is_match("class App : Application"));
    }

    #[test]
    fn test_activity_marker() {
        let marker = Regex::new(ACTIVITY_SUBCLASS).unwrap();
        assert!(marker.is_match("class MainActivity : ComponentActivity() {"));
        assert!(marker.is_match("public class MainActivity extends AppCompatActivity {"));
        assert!(!marker.is_match("class MainViewModel : ViewModel() {"));
        assert!(!marker.is_match("class Host : ComponentActivity.Callback {"));
    }

    #[test]
    fn test_main_source_set_comes_first() {
        let system = crate::system::MockSystem::new()
            .with_file("/p/src/androidTest/java/A.kt", b"")
            .unwrap()
            .with_file("/p/src/debug/java/B.java", b"")
            .unwrap()
            .with_file("/p/src/main/java/C.kt", b"")
            .unwrap()
            .with_file("/p/src/maintenance/D.kt", b"")
            .unwrap()
            .with_file("/p/src/main/res/values.xml", b"")
            .unwrap();
        let files = source_files(&system, Path::new("/p/src")).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/p/src/main/java/C.kt"),
                PathBuf::from("/p/src/androidTest/java/A.kt"),
                PathBuf::from("/p/src/debug/java/B.java"),
                PathBuf::from("/p/src/maintenance/D.kt"),
            ]
        );
    }
}
