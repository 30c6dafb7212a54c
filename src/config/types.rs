use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Translation directory used when none is configured.
pub const DEFAULT_PATH: &str = "resources/lang";

/// Locale used for both the default and fallback locale when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Translator settings.
///
/// An empty field means "unset" and is replaced by its default when a
/// `Translator` is built (see [`Config::with_defaults`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory holding the topic files, relative to the working directory.
    pub translation_path: String,

    /// Locale used by `translate` when no locale is given.
    pub default_locale: String,

    /// Locale consulted when the requested locale has no translation.
    pub fallback_locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_path: DEFAULT_PATH.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    /// A config with every field unset.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            translation_path: String::new(),
            default_locale: String::new(),
            fallback_locale: String::new(),
        }
    }

    #[must_use]
    pub fn translation_path(mut self, path: impl Into<String>) -> Self {
        self.translation_path = path.into();
        self
    }

    #[must_use]
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    #[must_use]
    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    /// Replaces every empty field with its default value.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        Self::default().merge(self)
    }

    /// Overlays the non-empty fields of `other` onto `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            translation_path: non_empty_or(other.translation_path, self.translation_path),
            default_locale: non_empty_or(other.default_locale, self.default_locale),
            fallback_locale: non_empty_or(other.fallback_locale, self.fallback_locale),
        }
    }
}

/// Returns `value` unless it is empty.
fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() { fallback } else { value }
}
