//! topic-i18n
//!
//! Translation lookup for `topic.field` keys backed by one YAML or JSON file
//! per topic. Topic files are read on first use and cached for the life of
//! the translator.
//!
//! ```no_run
//! use topic_i18n::{Config, Params, Translator};
//!
//! let translator = Translator::new(Config::default().default_locale("zh"))?;
//! let text = translator.translate_with(
//!     "validation.password_length_is_insufficient",
//!     &Params::new().with("length", "6"),
//! );
//! # Ok::<(), topic_i18n::TranslatorError>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod global;
pub mod key;
pub mod translator;

pub use config::Config;
pub use dictionary::{
    DictionaryStore,
    LookupError,
};
pub use translator::{
    Params,
    Translator,
    TranslatorError,
};
