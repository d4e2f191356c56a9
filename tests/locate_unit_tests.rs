//! Unit tests for file location

mod common;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::common::*;
    use std::path::{Path, PathBuf};
    use uxgraft::config::ProjectLayout;
    use uxgraft::locate::{
        EntryKind, find_application_source, find_entry_source, find_launcher_activity,
        resolve_app_build, resolve_settings,
    };
    use uxgraft::system::MockSystem;

    #[test]
    fn kotlin_dsl_wins_over_groovy() {
        let system = MockSystem::new()
            .with_file("/project/settings.gradle", b"")
            .unwrap()
            .with_file("/project/settings.gradle.kts", b"")
            .unwrap()
            .with_file("/project/app/build.gradle", b"")
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(
            resolve_settings(&system, &layout).unwrap(),
            Some(PathBuf::from("/project/settings.gradle.kts"))
        );
        assert_eq!(
            resolve_app_build(&system, &layout).unwrap(),
            Some(PathBuf::from("/project/app/build.gradle"))
        );
    }

    #[test]
    fn nothing_found_in_empty_project() {
        let system = MockSystem::new().with_dir(ROOT).unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(resolve_settings(&system, &layout).unwrap(), None);
        assert_eq!(resolve_app_build(&system, &layout).unwrap(), None);
        assert_eq!(find_entry_source(&system, &layout).unwrap(), None);
    }

    #[test]
    fn application_subclass_found_by_content() {
        let system = kotlin_project()
            .with_file(
                "/project/app/src/main/java/com/example/demo/ApplicationUtils.kt",
                b"object ApplicationUtils {}\n",
            )
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(
            find_application_source(&system, &layout).unwrap(),
            Some(PathBuf::from(KOTLIN_APP_PATH))
        );
        let entry = find_entry_source(&system, &layout).unwrap().unwrap();
        assert_eq!(entry.kind, EntryKind::Application);
    }

    #[test]
    fn launcher_activity_used_without_application() {
        let system = groovy_project();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(find_application_source(&system, &layout).unwrap(), None);
        assert_eq!(
            find_launcher_activity(&system, &layout).unwrap(),
            Some(PathBuf::from(JAVA_MAIN_PATH))
        );
        let entry = find_entry_source(&system, &layout).unwrap().unwrap();
        assert_eq!(entry.kind, EntryKind::LauncherActivity);
        assert_eq!(entry.path, Path::new(JAVA_MAIN_PATH));
    }

    #[test]
    fn launcher_source_must_extend_an_activity() {
        let system = MockSystem::new()
            .with_file("/project/app/src/main/AndroidManifest.xml", MANIFEST.as_bytes())
            .unwrap()
            .with_file(
                "/project/app/src/main/java/MainActivityTest.kt",
                b"class MainActivityTest { val name = \"MainActivity\" }\n",
            )
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(find_launcher_activity(&system, &layout).unwrap(), None);
    }

    #[test]
    fn manifest_without_launcher_yields_nothing() {
        let manifest = r#"<manifest><application>
            <activity android:name=".MainActivity" android:exported="false"></activity>
        </application></manifest>"#;
        let system = MockSystem::new()
            .with_file("/project/app/src/main/AndroidManifest.xml", manifest.as_bytes())
            .unwrap()
            .with_file(JAVA_MAIN_PATH, JAVA_MAIN_ACTIVITY.as_bytes())
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(find_launcher_activity(&system, &layout).unwrap(), None);
    }

    #[test]
    fn lifecycle_callbacks_are_not_an_application() {
        let system = MockSystem::new()
            .with_file(
                "/project/app/src/main/java/com/x/ActivityTracker.kt",
                b"class ActivityTracker : Application.ActivityLifecycleCallbacks {\n}\n",
            )
            .unwrap()
            .with_file(
                "/project/app/src/main/java/com/x/MyApp.kt",
                b"class MyApp : Application() {\n}\n",
            )
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(
            find_application_source(&system, &layout).unwrap(),
            Some(PathBuf::from("/project/app/src/main/java/com/x/MyApp.kt"))
        );
    }

    #[test]
    fn main_source_set_wins_over_test_sources() {
        let system = MockSystem::new()
            .with_file(
                "/project/app/src/androidTest/java/com/x/TestApp.kt",
                b"class TestApp : Application() {\n}\n",
            )
            .unwrap()
            .with_file(
                "/project/app/src/main/java/com/x/MyApp.kt",
                b"class MyApp : Application() {\n}\n",
            )
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(
            find_application_source(&system, &layout).unwrap(),
            Some(PathBuf::from("/project/app/src/main/java/com/x/MyApp.kt"))
        );
    }

    #[test]
    fn launcher_activity_prefers_main_source_set() {
        let system = groovy_project()
            .with_file(
                "/project/app/src/debug/java/com/example/legacy/MainActivity.java",
                JAVA_MAIN_ACTIVITY.as_bytes(),
            )
            .unwrap();
        let layout = ProjectLayout::new(ROOT);

        assert_eq!(
            find_launcher_activity(&system, &layout).unwrap(),
            Some(PathBuf::from(JAVA_MAIN_PATH))
        );
    }
}
