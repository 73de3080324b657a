//! Read-only field access on domain records.

use std::collections::{BTreeMap, HashMap};

use crate::FieldValue;

/// Capability to expose named fields of a record.
///
/// Implemented per concrete record type, usually with a `match` over the
/// field names the type knows about. Returning `None` means the record has
/// no such field, which is distinct from a field whose value is
/// [`FieldValue::Null`].
///
/// # Examples
///
/// ```
/// use field_projection::{FieldReadable, FieldValue};
///
/// struct Role {
///     id: i64,
///     name: String,
/// }
///
/// impl FieldReadable for Role {
///     fn read(&self, field: &str) -> Option<FieldValue> {
///         match field {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
///
///     fn record_kind(&self) -> &str {
///         "role"
///     }
/// }
///
/// let role = Role { id: 3, name: "seller".to_string() };
/// assert_eq!(role.read("id"), Some(FieldValue::Int(3)));
/// assert_eq!(role.read("password"), None);
/// ```
pub trait FieldReadable {
    /// Reads a field by its exact name.
    fn read(&self, field: &str) -> Option<FieldValue>;

    /// Names the kind of record, used in errors and log output.
    fn record_kind(&self) -> &str {
        "record"
    }
}

impl<T: FieldReadable + ?Sized> FieldReadable for &T {
    fn read(&self, field: &str) -> Option<FieldValue> {
        (**self).read(field)
    }

    fn record_kind(&self) -> &str {
        (**self).record_kind()
    }
}

impl<T: FieldReadable + ?Sized> FieldReadable for Box<T> {
    fn read(&self, field: &str) -> Option<FieldValue> {
        (**self).read(field)
    }

    fn record_kind(&self) -> &str {
        (**self).record_kind()
    }
}

impl FieldReadable for HashMap<String, FieldValue> {
    fn read(&self, field: &str) -> Option<FieldValue> {
        self.get(field).cloned()
    }
}

impl FieldReadable for BTreeMap<String, FieldValue> {
    fn read(&self, field: &str) -> Option<FieldValue> {
        self.get(field).cloned()
    }
}

/// JSON objects are records whose scalar members keep their JSON type.
///
/// Strings, booleans and nulls map onto their [`FieldValue`] counterparts;
/// numbers, arrays and nested objects stay as [`FieldValue::Json`]. JSON has
/// no timestamp type, so timestamps arrive as plain text.
impl FieldReadable for serde_json::Map<String, serde_json::Value> {
    fn read(&self, field: &str) -> Option<FieldValue> {
        self.get(field).map(|value| match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Json(other.clone()),
        })
    }

    fn record_kind(&self) -> &str {
        "json object"
    }
}

/// A generic, insertion-ordered record built from field/value pairs.
///
/// Useful where records arrive as loose key/value data, and in tests.
///
/// # Examples
///
/// ```
/// use field_projection::{FieldReadable, FieldValue, MapRecord};
///
/// let user = MapRecord::new("user")
///     .with("name", "Alice")
///     .with("is_active", true);
///
/// assert_eq!(user.record_kind(), "user");
/// assert_eq!(user.read("is_active"), Some(FieldValue::Bool(true)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapRecord {
    kind: String,
    fields: Vec<(String, FieldValue)>,
}

impl MapRecord {
    /// Creates an empty record of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }

    /// Sets a field, replacing any earlier value under the same name.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field in place, replacing any earlier value under the same name.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        let field = field.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Removes a field, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(index).1)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FieldReadable for MapRecord {
    fn read(&self, field: &str) -> Option<FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.clone())
    }

    fn record_kind(&self) -> &str {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_record_set_replaces_in_place() {
        let record = MapRecord::new("user")
            .with("name", "Alice")
            .with("email", "a@example.com")
            .with("name", "Bob");

        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "email"]);
        assert_eq!(record.read("name"), Some(FieldValue::Text("Bob".to_string())));
    }

    #[test]
    fn map_record_distinguishes_missing_from_null() {
        let record = MapRecord::new("user").with("deleted_at", None::<String>);

        assert_eq!(record.read("deleted_at"), Some(FieldValue::Null));
        assert_eq!(record.read("missing"), None);
    }

    #[test]
    fn map_record_remove() {
        let mut record = MapRecord::new("listing").with("title", "Lamp");
        assert_eq!(record.len(), 1);

        assert_eq!(
            record.remove("title"),
            Some(FieldValue::Text("Lamp".to_string()))
        );
        assert!(record.is_empty());
        assert_eq!(record.remove("title"), None);
    }

    #[test]
    fn references_and_boxes_delegate() {
        let record = MapRecord::new("role").with("name", "admin");
        let by_ref = &record;
        let boxed: Box<dyn FieldReadable> = Box::new(record.clone());

        assert_eq!(by_ref.record_kind(), "role");
        assert_eq!(boxed.record_kind(), "role");
        assert_eq!(boxed.read("name"), record.read("name"));
    }

    #[test]
    fn hash_map_records_read_by_key() {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), FieldValue::Int(1));

        assert_eq!(fields.read("id"), Some(FieldValue::Int(1)));
        assert_eq!(fields.record_kind(), "record");
    }

    #[test]
    fn json_object_scalars_keep_their_type() {
        let value = json!({
            "name": "Alice",
            "active": true,
            "deleted_at": null,
            "rating": 4.5,
            "tags": ["a", "b"]
        });
        let object = value.as_object().unwrap();

        assert_eq!(object.read("name"), Some(FieldValue::Text("Alice".to_string())));
        assert_eq!(object.read("active"), Some(FieldValue::Bool(true)));
        assert_eq!(object.read("deleted_at"), Some(FieldValue::Null));
        assert_eq!(object.read("rating"), Some(FieldValue::Json(json!(4.5))));
        assert_eq!(object.read("tags"), Some(FieldValue::Json(json!(["a", "b"]))));
        assert_eq!(object.read("missing"), None);
    }
}
