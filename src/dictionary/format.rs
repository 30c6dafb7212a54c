use std::path::{
    Path,
    PathBuf,
};

use super::{
    Dictionary,
    LoadError,
};

/// File formats a topic can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Yaml,
    Yml,
    Json,
}

impl FileFormat {
    /// Probe order when loading a topic. The first readable file wins.
    pub const PRIORITY: [Self; 3] = [Self::Yaml, Self::Yml, Self::Json];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Yml => "yml",
            Self::Json => "json",
        }
    }

    /// `<dir>/<topic>.<ext>`
    #[must_use]
    pub fn topic_path(self, dir: &Path, topic: &str) -> PathBuf {
        dir.join(format!("{topic}.{}", self.extension()))
    }

    /// Parses the contents of a topic file.
    ///
    /// Every format goes through the YAML decoder, so JSON files accept the
    /// same scalar leaves as YAML ones (`6` reads as `"6"`). A file holding
    /// no document parses as an empty dictionary.
    pub fn parse(self, path: &Path, content: &[u8]) -> Result<Dictionary, LoadError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Dictionary::new());
        }
        serde_yaml::from_slice(content)
            .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// `topic_path`: `<dir>/<topic>.<ext>` for each format.
    #[rstest]
    #[case(FileFormat::Yaml, "/lang/user.yaml")]
    #[case(FileFormat::Yml, "/lang/user.yml")]
    #[case(FileFormat::Json, "/lang/user.json")]
    fn test_topic_path(#[case] format: FileFormat, #[case] expected: &str) {
        let path = format.topic_path(Path::new("/lang"), "user");

        assert_eq!(path, PathBuf::from(expected));
    }

    /// Two-level YAML mapping into a dictionary.
    #[googletest::test]
    fn test_parse_yaml() {
        let content = "not_found:\n  en: User not found!\n  zh: 找不到用户!\n";

        let dict = FileFormat::Yml.parse(Path::new("user.yml"), content.as_bytes()).unwrap();

        expect_that!(
            dict.get("not_found").and_then(|e| e.get("en")).map(String::as_str),
            some(eq("User not found!"))
        );
        expect_that!(
            dict.get("not_found").and_then(|e| e.get("zh")).map(String::as_str),
            some(eq("找不到用户!"))
        );
    }

    /// Two-level JSON mapping into a dictionary.
    #[googletest::test]
    fn test_parse_json() {
        let content = r#"{"insufficient_balance": {"en": "Not enough"}}"#;

        let dict = FileFormat::Json.parse(Path::new("messages.json"), content.as_bytes()).unwrap();

        expect_that!(
            dict.get("insufficient_balance").and_then(|e| e.get("en")).map(String::as_str),
            some(eq("Not enough"))
        );
    }

    /// JSON leaves that are not strings are read as their scalar text.
    #[googletest::test]
    fn test_parse_json_scalar_leaves() {
        let content = r#"{"k": {"en": 6, "zh": "x"}}"#;

        let dict = FileFormat::Json.parse(Path::new("t.json"), content.as_bytes()).unwrap();
        let entry = dict.get("k").unwrap();

        expect_that!(entry.get("en").map(String::as_str), some(eq("6")));
        expect_that!(entry.get("zh").map(String::as_str), some(eq("x")));
    }

    /// A file with no document is an empty topic, whatever its extension.
    #[rstest]
    #[case::yaml(FileFormat::Yaml, "\n  \n")]
    #[case::yml(FileFormat::Yml, "")]
    #[case::json(FileFormat::Json, "")]
    #[case::json_blank(FileFormat::Json, " \n\t")]
    fn test_parse_empty(#[case] format: FileFormat, #[case] content: &str) {
        let dict = format.parse(Path::new("empty"), content.as_bytes()).unwrap();

        assert!(dict.is_empty());
    }

    /// Syntax errors and wrongly shaped documents fail for every format.
    #[rstest]
    #[case::yaml(FileFormat::Yaml, "some_key: [unclosed")]
    #[case::yaml_wrong_shape(FileFormat::Yml, "- just\n- a list\n")]
    #[case::json(FileFormat::Json, "{\"some_key\": {\"en\": \"x\"")]
    #[case::json_wrong_shape(FileFormat::Json, "[\"a\", \"b\"]")]
    fn test_parse_malformed(#[case] format: FileFormat, #[case] content: &str) {
        let result = format.parse(Path::new("malformed"), content.as_bytes());

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
