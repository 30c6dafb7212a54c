//! Translator: locale settings on top of a [`DictionaryStore`].

use thiserror::Error;

use crate::config::Config;
use crate::dictionary::{
    DictionaryStore,
    LookupError,
};

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Failed to resolve the working directory: {0}")]
    WorkingDirectory(#[from] std::io::Error),

    #[error("Global translator used before init()")]
    NotInitialized,
}

/// Placeholder values, applied in insertion order.
///
/// Each `(name, value)` pair replaces every `:name:` in the translated text.
///
/// # Examples
/// ```
/// use topic_i18n::translator::Params;
///
/// let params = Params::new().with("length", "6");
/// assert_eq!(params.apply("more than :length: characters"), "more than 6 characters");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Placeholder name and replacement text.
    pairs: Vec<(String, String)>,
}

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Substitutes every param into `text`.
    ///
    /// Each param is a separate literal pass over the current text; nothing
    /// is rescanned for nested placeholders within a pass.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.pairs.iter().fold(text.to_string(), |acc, (name, value)| {
            acc.replace(&format!(":{name}:"), value)
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Translates `topic.field` keys using a fixed [`Config`].
///
/// The config is completed with defaults at construction and never changes
/// afterwards. Each translator owns its own store.
#[derive(Debug)]
pub struct Translator {
    /// Config with defaults applied.
    config: Config,
    /// Topic cache bound to `config.translation_path`.
    store: DictionaryStore,
}

impl Translator {
    /// Builds a translator, filling empty config fields with defaults.
    ///
    /// Fails only if the working directory cannot be resolved.
    pub fn new(config: Config) -> Result<Self, TranslatorError> {
        let config = config.with_defaults();
        let store = DictionaryStore::new(&config.translation_path)?;
        tracing::debug!(
            "Translator ready: dir={:?}, default={}, fallback={}",
            store.base_dir(),
            config.default_locale,
            config.fallback_locale
        );

        Ok(Self { config, store })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Translates `key` into the default locale.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.translate_by(&self.config.default_locale, key)
    }

    #[must_use]
    pub fn translate_with(&self, key: &str, params: &Params) -> String {
        self.translate_by_with(&self.config.default_locale, key, params)
    }

    /// Translates `key` into `locale`, falling back to the fallback locale.
    ///
    /// When both miss, the key echoed by the fallback lookup is returned.
    #[must_use]
    pub fn translate_by(&self, locale: &str, key: &str) -> String {
        self.lookup(locale, key).unwrap_or_else(LookupError::into_echo)
    }

    #[must_use]
    pub fn translate_by_with(&self, locale: &str, key: &str, params: &Params) -> String {
        let text = self.translate_by(locale, key);
        if params.is_empty() {
            return text;
        }
        params.apply(&text)
    }

    /// Looks `key` up in `locale`, then in the fallback locale.
    ///
    /// The error is the fallback attempt's miss.
    pub fn lookup(&self, locale: &str, key: &str) -> Result<String, LookupError> {
        self.store.find(locale, key).or_else(|e| {
            tracing::debug!(
                "Falling back to '{}' for '{key}': {e}",
                self.config.fallback_locale
            );
            self.store.find(&self.config.fallback_locale, key)
        })
    }
}
