//! Translation key parsing.

use std::fmt;

/// Separator between the topic and the field of a key.
pub const KEY_SEPARATOR: char = '.';

/// A parsed `"<topic>.<field>"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransKey<'a> {
    /// Topic name, which is also the file stem of the backing file.
    topic: &'a str,
    /// Field within the topic.
    field: &'a str,
}

impl<'a> TransKey<'a> {
    /// Splits `key` into topic and field.
    ///
    /// Returns `None` unless the key has exactly two non-empty parts.
    ///
    /// # Examples
    /// ```
    /// use topic_i18n::key::TransKey;
    ///
    /// let key = TransKey::parse("user.not_found").unwrap();
    /// assert_eq!(key.topic(), "user");
    /// assert_eq!(key.field(), "not_found");
    ///
    /// assert!(TransKey::parse("user").is_none());
    /// assert!(TransKey::parse("user.profile.name").is_none());
    /// ```
    #[must_use]
    pub fn parse(key: &'a str) -> Option<Self> {
        let mut parts = key.split(KEY_SEPARATOR);
        let topic = parts.next()?;
        let field = parts.next()?;

        if parts.next().is_some() || topic.is_empty() || field.is_empty() {
            return None;
        }

        Some(Self { topic, field })
    }

    #[must_use]
    pub const fn topic(&self) -> &'a str {
        self.topic
    }

    #[must_use]
    pub const fn field(&self) -> &'a str {
        self.field
    }
}

impl fmt::Display for TransKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_SEPARATOR}{}", self.topic, self.field)
    }
}
