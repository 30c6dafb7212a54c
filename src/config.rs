//! Translator configuration.
/// Config file loader
mod loader;
/// Configuration types and defaults
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_file,
    load_from_workspace,
};
pub use types::{
    Config,
    ConfigError,
    DEFAULT_LOCALE,
    DEFAULT_PATH,
};
