//! Ordered placeholder mapping
//!
//! Keys are placeholder tokens (`EMAIL_1`), values the original text they stand for.
//! Entries keep insertion order, which is pass order then discovery order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: IndexMap<String, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting the value in place if the key already exists.
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Re-identify redacted text: every `[KEY]` becomes the mapped value
pub fn restore(text: &str, mapping: &Mapping) -> String {
    let mut restored = text.to_string();
    for (key, value) in mapping.iter() {
        restored = restored.replace(&format!("[{}]", key), value);
    }
    restored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut mapping = Mapping::new();
        mapping.insert("EMAIL_1", "a@b.io");
        mapping.insert("NAME_1", "Jane Doe");
        mapping.insert("EMAIL_2", "c@d.io");

        let keys: Vec<_> = mapping.keys().collect();
        assert_eq!(keys, vec!["EMAIL_1", "NAME_1", "EMAIL_2"]);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut mapping = Mapping::new();
        mapping.insert("NAME_1", "Jane");
        mapping.insert("NAME_2", "John");

        let previous = mapping.insert("NAME_1", "Jane Doe");

        assert_eq!(previous, Some("Jane".to_string()));
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.keys().next(), Some("NAME_1"));
        assert_eq!(mapping.get("NAME_1"), Some("Jane Doe"));
    }

    #[test]
    fn test_json_object_preserves_order() {
        let mapping: Mapping = [("PHONE_NUMBER_1", "202-555-0199"), ("EMAIL_1", "x@y.com")]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            r#"{"PHONE_NUMBER_1":"202-555-0199","EMAIL_1":"x@y.com"}"#
        );

        let parsed: Mapping = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mapping);
        assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["PHONE_NUMBER_1", "EMAIL_1"]);
    }

    #[test]
    fn test_large_mapping_lookup() {
        let mapping: Mapping = (1..=20_000)
            .map(|i| (format!("EMAIL_{i}"), format!("user{i}@example.com")))
            .collect();

        assert_eq!(mapping.len(), 20_000);
        assert_eq!(mapping.get("EMAIL_19999"), Some("user19999@example.com"));
        assert_eq!(mapping.keys().last(), Some("EMAIL_20000"));
    }

    #[test]
    fn test_restore() {
        let mapping: Mapping = [("EMAIL_1", "jane@example.com"), ("NAME_1", "Jane")]
            .into_iter()
            .collect();

        let restored = restore("[NAME_1] <[EMAIL_1]>, cc [EMAIL_1]", &mapping);
        assert_eq!(restored, "Jane <jane@example.com>, cc jane@example.com");
    }

    #[test]
    fn test_restore_leaves_unknown_placeholders() {
        let mapping: Mapping = [("EMAIL_1", "a@b.io")].into_iter().collect();
        assert_eq!(restore("[EMAIL_2]", &mapping), "[EMAIL_2]");
    }
}
