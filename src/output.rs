//! The ordered result of a projection.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ProjectedValue;

/// Ordered output-key → wire-safe value pairs produced by one projection.
///
/// Serializes as a map in projection order. Owned by the caller; nothing
/// else holds a reference to it.
///
/// # Examples
///
/// ```
/// use field_projection::{project, FieldMap, MapRecord};
///
/// let map = FieldMap::new().field("isActive", "is_active").same("name");
/// let record = MapRecord::new("user").with("name", "Alice").with("is_active", true);
///
/// let output = project(&record, &map).unwrap();
/// assert_eq!(
///     serde_json::to_string(&output).unwrap(),
///     r#"{"isActive":true,"name":"Alice"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectedOutput {
    entries: Vec<(String, ProjectedValue)>,
}

impl ProjectedOutput {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Keys are unique by construction: the field map rejects duplicates.
    pub(crate) fn push(&mut self, key: &str, value: ProjectedValue) {
        self.entries.push((key.to_string(), value));
    }

    /// Looks up a value by output key.
    pub fn get(&self, key: &str) -> Option<&ProjectedValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if `key` was emitted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates output keys in projection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates entries in projection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts into a JSON object, keeping projection order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(self.clone().into())
    }
}

impl From<ProjectedOutput> for serde_json::Map<String, serde_json::Value> {
    fn from(output: ProjectedOutput) -> Self {
        output
            .entries
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::from(v)))
            .collect()
    }
}

impl IntoIterator for ProjectedOutput {
    type Item = (String, ProjectedValue);
    type IntoIter = std::vec::IntoIter<(String, ProjectedValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ProjectedOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
