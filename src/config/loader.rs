//! Config file loading.

use std::path::Path;

use super::{
    Config,
    ConfigError,
};

/// Name of the optional per-project config file.
pub const CONFIG_FILE_NAME: &str = ".topic-i18n.json";

/// Reads a JSON config file.
///
/// Missing fields keep their defaults.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;

    Ok(config)
}

/// Looks for [`CONFIG_FILE_NAME`] in `root`.
///
/// # Returns
/// - `Ok(Some(config))`: the file exists and parsed
/// - `Ok(None)`: no config file
/// - `Err(ConfigError)`: read or parse failure
pub fn load_from_workspace(root: &Path) -> Result<Option<Config>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_workspace`: reads the camelCase config file.
    #[rstest]
    fn test_load_from_workspace_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"translationPath": "i18n", "defaultLocale": "zh"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let config = load_from_workspace(temp_dir.path()).unwrap().unwrap();

        assert_eq!(config.translation_path, "i18n");
        assert_eq!(config.default_locale, "zh");
        assert_eq!(config.fallback_locale, "en");
    }

    /// `load_from_workspace`: `None` without a config file.
    #[rstest]
    fn test_load_from_workspace_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.unwrap().is_none());
    }

    /// `load_from_workspace`: invalid JSON is a parse error.
    #[rstest]
    fn test_load_from_workspace_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_from_file`: a missing file is an IO error.
    #[rstest]
    fn test_load_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_file(&temp_dir.path().join("nope.json"));

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
