//! Per-topic translation dictionaries loaded lazily from disk.
/// Load and lookup errors
mod error;
/// Supported topic file formats
mod format;
/// Read-through topic cache
mod store;

use std::collections::HashMap;

pub use error::{
    LoadError,
    LookupError,
};
pub use format::FileFormat;
pub use store::DictionaryStore;

/// Translations of one field: locale -> text.
pub type Entry = HashMap<String, String>;

/// One topic file: field -> [`Entry`].
pub type Dictionary = HashMap<String, Entry>;
