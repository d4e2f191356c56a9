//! Classification of the caller-supplied key reference

/// Prefix of a reference to a generated build-time constant
pub const BUILD_CONFIG_PREFIX: &str = "BuildConfig.";

/// Name a literal key is stored and exposed under
pub const DEFAULT_SECRET_NAME: &str = "UXCAM_KEY";

/// Minimum length (exclusive) of a string taken as a literal key
const LITERAL_MIN_LEN: usize = 20;

/// What the caller passed as the app key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRef {
    /// Nothing usable
    Empty,
    /// `BuildConfig.NAME`, holding `NAME`
    BuildConfig(String),
    /// The secret itself
    Literal(String),
    /// A bare name to look up in `local.properties`
    Variable(String),
}

impl KeyRef {
    /// Classify `input`
    ///
    /// Whitespace and one pair of matching surrounding quotes are removed first.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let value = strip_quotes(input.trim()).trim();
        if value.is_empty() {
            return Self::Empty;
        }
        if let Some(name) = value.strip_prefix(BUILD_CONFIG_PREFIX) {
            let name = name.trim();
            return if name.is_empty() {
                Self::Empty
            } else {
                Self::BuildConfig(name.to_owned())
            };
        }
        if looks_like_secret(value) {
            return Self::Literal(value.to_owned());
        }
        Self::Variable(value.to_owned())
    }
}

/// Heuristic for a literal key: longer than 20 chars, with at least one
/// alphanumeric char, neither purely alphabetic nor purely numeric
#[must_use]
pub fn looks_like_secret(value: &str) -> bool {
    value.chars().count() > LITERAL_MIN_LEN
        && value.chars().any(char::is_alphanumeric)
        && !value.chars().all(char::is_alphabetic)
        && !value.chars().all(|c| c.is_ascii_digit())
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
