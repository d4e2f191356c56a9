//! Configuration management module
//!
//! Resolves the project layout: the project root plus the relative path of every
//! file role uxgraft reads or patches. Defaults follow the standard Android Studio
//! layout; an optional `uxgraft.yaml` can override any of them.

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the project root
pub const DEFAULT_CONFIG_FILE: &str = "uxgraft.yaml";

/// Contents of `uxgraft.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path overrides, relative to the project root
    #[serde(default)]
    pub layout: LayoutOverrides,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &Path) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate configuration logic
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }
}

/// Optional per-role path overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_gradle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_gradle_kts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_build_gradle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_build_gradle_kts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore: Option<String>,
}

impl LayoutOverrides {
    /// Every override that is set, paired with its key
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("settingsGradle", self.settings_gradle.as_deref()),
            ("settingsGradleKts", self.settings_gradle_kts.as_deref()),
            ("appBuildGradle", self.app_build_gradle.as_deref()),
            ("appBuildGradleKts", self.app_build_gradle_kts.as_deref()),
            ("manifest", self.manifest.as_deref()),
            ("sourceRoot", self.source_root.as_deref()),
            ("localProperties", self.local_properties.as_deref()),
            ("gitignore", self.gitignore.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// Where every file role lives for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    settings_groovy: PathBuf,
    settings_kts: PathBuf,
    app_build_groovy: PathBuf,
    app_build_kts: PathBuf,
    manifest: PathBuf,
    source_root: PathBuf,
    local_properties: PathBuf,
    gitignore: PathBuf,
}

impl ProjectLayout {
    /// Standard Android Studio layout under `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            settings_groovy: PathBuf::from("settings.gradle"),
            settings_kts: PathBuf::from("settings.gradle.kts"),
            app_build_groovy: PathBuf::from("app/build.gradle"),
            app_build_kts: PathBuf::from("app/build.gradle.kts"),
            manifest: PathBuf::from("app/src/main/AndroidManifest.xml"),
            source_root: PathBuf::from("app/src"),
            local_properties: PathBuf::from("local.properties"),
            gitignore: PathBuf::from(".gitignore"),
        }
    }

    /// Replace default paths with the ones set in `overrides`
    #[must_use]
    pub fn with_overrides(mut self, overrides: &LayoutOverrides) -> Self {
        let slots = [
            (&mut self.settings_groovy, &overrides.settings_gradle),
            (&mut self.settings_kts, &overrides.settings_gradle_kts),
            (&mut self.app_build_groovy, &overrides.app_build_gradle),
            (&mut self.app_build_kts, &overrides.app_build_gradle_kts),
            (&mut self.manifest, &overrides.manifest),
            (&mut self.source_root, &overrides.source_root),
            (&mut self.local_properties, &overrides.local_properties),
            (&mut self.gitignore, &overrides.gitignore),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                *slot = PathBuf::from(value);
            }
        }
        self
    }

    /// Build the layout for `root`, applying `config_path` (or `uxgraft.yaml` in the
    /// root when present)
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named config file is missing or any config
    /// file fails to parse or validate
    pub fn load(system: &dyn System, root: &Path, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let layout = Self::new(root);
        let config = match config_path {
            Some(path) => Some(Config::load_from_file(system, path)?),
            None => {
                let default_path = root.join(DEFAULT_CONFIG_FILE);
                if system.is_file(&default_path)? {
                    Some(Config::load_from_file(system, &default_path)?)
                } else {
                    None
                }
            }
        };
        Ok(match config {
            Some(config) => layout.with_overrides(&config.layout),
            None => layout,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings script candidates, Kotlin DSL first
    #[must_use]
    pub fn settings_candidates(&self) -> [PathBuf; 2] {
        [self.root.join(&self.settings_kts), self.root.join(&self.settings_groovy)]
    }

    /// App build script candidates, Kotlin DSL first
    #[must_use]
    pub fn app_build_candidates(&self) -> [PathBuf; 2] {
        [self.root.join(&self.app_build_kts), self.root.join(&self.app_build_groovy)]
    }

    #[must_use]
    pub fn manifest(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    #[must_use]
    pub fn source_root(&self) -> PathBuf {
        self.root.join(&self.source_root)
    }

    #[must_use]
    pub fn local_properties(&self) -> PathBuf {
        self.root.join(&self.local_properties)
    }

    #[must_use]
    pub fn gitignore(&self) -> PathBuf {
        self.root.join(&self.gitignore)
    }

    /// File name used for the secrets file in `.gitignore`
    #[must_use]
    pub fn local_properties_entry(&self) -> String {
        self.local_properties.to_string_lossy().replace('\\', "/")
    }

    /// `path` relative to the project root, for messages
    #[must_use]
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
