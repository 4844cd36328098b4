//! Ordered form field values captured at call time.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from field name to string value.
///
/// Re-inserting a name keeps its original position and replaces the value, the
/// way named form controls collapse into a plain object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    entries: Vec<(String, String)>,
}

impl FieldSet {
    /// Empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a value, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Value recorded under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove and return the value under `name`, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether the set holds no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct field names.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_keeps_position_and_last_value() {
        let fields: FieldSet = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        let collected: Vec<_> = fields.iter().collect();
        assert_eq!(collected, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut fields: FieldSet = [("a", "1"), ("q", "x=1"), ("b", "2")].into_iter().collect();
        assert_eq!(fields.remove("q").as_deref(), Some("x=1"));
        assert_eq!(fields.remove("missing"), None);
        let names: Vec<_> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn serializes_as_ordered_object() -> Result<(), serde_json::Error> {
        let fields: FieldSet = [("text", "hi"), ("algo", "md5")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&fields)?,
            r#"{"text":"hi","algo":"md5"}"#
        );
        assert_eq!(serde_json::to_string(&FieldSet::new())?, "{}");
        Ok(())
    }
}
