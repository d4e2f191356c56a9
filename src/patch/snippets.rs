//! Fixed text inserted into the host project

use super::Dialect;

/// Placeholder replaced by the key expression in the init snippet
const KEY_PLACEHOLDER: &str = "{key}";

/// Purpose of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Imports,
    Repository,
    Dependency,
    Init,
}

impl SnippetKind {
    /// Substring whose presence means the snippet was already inserted
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Imports => "import com.uxcam.UXCam",
            Self::Repository => "sdk.uxcam.com/android",
            Self::Dependency => "com.uxcam:uxcam:",
            Self::Init => "UXCam.startWithConfiguration",
        }
    }

    /// Indentation applied to each inserted line
    #[must_use]
    pub const fn indent(self) -> usize {
        match self {
            Self::Imports => 0,
            Self::Dependency => 4,
            Self::Repository | Self::Init => 8,
        }
    }
}

/// Template for `kind` in `dialect`
#[must_use]
pub const fn template(dialect: Dialect, kind: SnippetKind) -> &'static str {
    match (dialect, kind) {
        (Dialect::Java, SnippetKind::Imports) => {
            "import com.uxcam.UXCam;\nimport com.uxcam.datamodel.UXConfig;"
        }
        (Dialect::Kotlin, SnippetKind::Imports) => {
            "import com.uxcam.UXCam\nimport com.uxcam.datamodel.UXConfig"
        }
        (Dialect::Java, SnippetKind::Repository) => {
            "maven { url \"https://sdk.uxcam.com/android/\" }"
        }
        (Dialect::Kotlin, SnippetKind::Repository) => {
            "maven(\"https://sdk.uxcam.com/android/\")"
        }
        (Dialect::Java, SnippetKind::Dependency) => "implementation 'com.uxcam:uxcam:3.+'",
        (Dialect::Kotlin, SnippetKind::Dependency) => "implementation(\"com.uxcam:uxcam:3.+\")",
        (Dialect::Java, SnippetKind::Init) => concat!(
            "String uxcamKey = {key};\n",
            "UXConfig uxConfig = new UXConfig.Builder(uxcamKey)\n",
            "        .enableIntegrationLogging(BuildConfig.DEBUG)\n",
            "        .build();\n",
            "UXCam.startWithConfiguration(uxConfig);",
        ),
        (Dialect::Kotlin, SnippetKind::Init) => concat!(
            "val uxcamKey = {key}\n",
            "val uxConfig = UXConfig.Builder(uxcamKey)\n",
            "    .enableIntegrationLogging(BuildConfig.DEBUG)\n",
            "    .build()\n",
            "UXCam.startWithConfiguration(uxConfig)",
        ),
    }
}

/// Render `kind` for insertion right after an anchor: a leading newline, then every
/// line indented for its block
#[must_use]
pub fn render(dialect: Dialect, kind: SnippetKind, key_expression: Option<&str>) -> String {
    let mut text = template(dialect, kind).to_owned();
    if let Some(expression) = key_expression {
        text = text.replace(KEY_PLACEHOLDER, expression);
    }
    let pad = " ".repeat(kind.indent());
    text.lines()
        .map(|line| format!("\n{pad}{line}"))
        .collect()
}
