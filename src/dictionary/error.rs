use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a topic file into the store.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Translation file not found for topic '{topic}' in {dir:?}")]
    NotFound { topic: String, dir: PathBuf },

    /// YAML and JSON topic files alike; JSON is read as a YAML document.
    #[error("Failed to parse translation file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A lookup that produced no translation.
///
/// [`LookupError::echo`] is the text callers show in place of a translation.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Malformed translation key '{key}': expected '<topic>.<field>'")]
    MalformedKey { key: String },

    #[error("Topic for '{key}' could not be loaded: {source}")]
    TopicUnavailable {
        key: String,
        #[source]
        source: LoadError,
    },

    #[error("Unknown translation key '{key}'")]
    UnknownField { key: String },

    #[error("No '{locale}' translation for '{key}'")]
    UnknownLocale { key: String, locale: String },
}

impl LookupError {
    /// The key echoed back for this miss.
    ///
    /// The original input for malformed keys, otherwise the
    /// reconstructed `topic.field`.
    #[must_use]
    pub fn echo(&self) -> &str {
        match self {
            Self::MalformedKey { key }
            | Self::TopicUnavailable { key, .. }
            | Self::UnknownField { key }
            | Self::UnknownLocale { key, .. } => key,
        }
    }

    #[must_use]
    pub fn into_echo(self) -> String {
        match self {
            Self::MalformedKey { key }
            | Self::TopicUnavailable { key, .. }
            | Self::UnknownField { key }
            | Self::UnknownLocale { key, .. } => key,
        }
    }
}
