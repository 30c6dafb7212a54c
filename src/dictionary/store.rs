use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use super::{
    Dictionary,
    FileFormat,
    LoadError,
    LookupError,
};
use crate::key::TransKey;

/// Read-through cache of topic dictionaries.
///
/// A topic is read from `<base_dir>/<topic>.{yaml,yml,json}` the first time a
/// key references it and served from memory afterwards. Failed loads are not
/// remembered, so a missing or broken topic is retried on every lookup.
///
/// # Locking
///
/// The shelf lock is held across the whole check, read, parse and insert
/// sequence, so concurrent lookups of an unloaded topic load it once.
#[derive(Debug)]
pub struct DictionaryStore {
    /// Absolute directory holding the topic files.
    base_dir: PathBuf,
    /// Loaded topics (topic -> dictionary).
    shelf: Mutex<HashMap<String, Dictionary>>,
}

impl DictionaryStore {
    /// Creates a store for `path` resolved against the current working directory.
    ///
    /// The directory is resolved once here, not per lookup.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::with_base_dir(root.join(path)))
    }

    /// Creates a store reading topics straight from `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into(), shelf: Mutex::new(HashMap::new()) }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Finds the `locale` translation of `key`.
    ///
    /// Loads the key's topic on first use. On a miss the error's
    /// [`LookupError::echo`] is the text to show instead.
    pub fn find(&self, locale: &str, key: &str) -> Result<String, LookupError> {
        let Some(trans_key) = TransKey::parse(key) else {
            tracing::trace!(key, "Malformed translation key");
            return Err(LookupError::MalformedKey { key: key.to_string() });
        };
        let topic = trans_key.topic();

        let mut shelf = self.lock_shelf();
        if !shelf.contains_key(topic) {
            let dictionary = self.load_topic(topic).map_err(|source| {
                LookupError::TopicUnavailable { key: key.to_string(), source }
            })?;
            shelf.insert(topic.to_string(), dictionary);
        }

        find_in_shelf(&shelf, trans_key, locale)
    }

    /// Whether `topic` has been loaded into memory.
    #[must_use]
    pub fn is_loaded(&self, topic: &str) -> bool {
        self.lock_shelf().contains_key(topic)
    }

    /// Names of all loaded topics, sorted.
    #[must_use]
    pub fn loaded_topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.lock_shelf().keys().cloned().collect();
        topics.sort_unstable();
        topics
    }

    /// Reads and parses the first existing file for `topic`.
    ///
    /// Unreadable candidates fall through to the next extension. A parse
    /// failure ends the attempt without trying later extensions.
    fn load_topic(&self, topic: &str) -> Result<Dictionary, LoadError> {
        for format in FileFormat::PRIORITY {
            let path = format.topic_path(&self.base_dir, topic);

            let content = match std::fs::read(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::trace!("Skipping {:?}: {e}", path);
                    continue;
                }
            };

            tracing::debug!("Loading topic '{topic}' from: {:?}", path);
            return format.parse(&path, &content).inspect_err(|e| {
                tracing::warn!("{e}");
            });
        }

        tracing::debug!("No translation file for topic '{topic}' in {:?}", self.base_dir);
        Err(LoadError::NotFound { topic: topic.to_string(), dir: self.base_dir.clone() })
    }

    /// Locks the shelf, recovering it if a previous holder panicked.
    fn lock_shelf(&self) -> MutexGuard<'_, HashMap<String, Dictionary>> {
        self.shelf.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Looks up field and locale inside an already loaded topic.
fn find_in_shelf(
    shelf: &HashMap<String, Dictionary>,
    key: TransKey<'_>,
    locale: &str,
) -> Result<String, LookupError> {
    let Some(entry) = shelf.get(key.topic()).and_then(|dict| dict.get(key.field())) else {
        tracing::trace!(%key, "Unknown translation key");
        return Err(LookupError::UnknownField { key: key.to_string() });
    };

    entry.get(locale).cloned().ok_or_else(|| {
        tracing::trace!(%key, locale, "No translation for locale");
        LookupError::UnknownLocale { key: key.to_string(), locale: locale.to_string() }
    })
}
