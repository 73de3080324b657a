//! Tagged record values and their wire-safe projections.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A value read from a record, tagged by type at the accessor boundary.
///
/// Records decide which variant a field is when they expose it, so the
/// projection engine never has to inspect runtime types. Timestamps are
/// always held in UTC.
///
/// # Examples
///
/// ```
/// use field_projection::FieldValue;
///
/// assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
/// assert_eq!(FieldValue::from("Alice"), FieldValue::Text("Alice".to_string()));
/// assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value
    Null,
    /// Boolean flag
    Bool(bool),
    /// Point in time
    Timestamp(DateTime<Utc>),
    /// Calendar date without a time component
    Date(NaiveDate),
    /// Plain text
    Text(String),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Structured or otherwise untyped data
    Json(serde_json::Value),
}

impl FieldValue {
    /// Returns a short name for the variant, used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Timestamp(_) => "timestamp",
            Self::Date(_) => "date",
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Json(_) => "json",
        }
    }

    /// Returns `true` if this is [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A wire-safe value: the only three shapes a projection ever emits.
///
/// Serializes untagged, so JSON output is a plain string, boolean or `null`.
///
/// # Examples
///
/// ```
/// use field_projection::ProjectedValue;
///
/// let json = serde_json::to_string(&ProjectedValue::Null).unwrap();
/// assert_eq!(json, "null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ProjectedValue {
    /// String output (including formatted timestamps)
    Text(String),
    /// Boolean output
    Bool(bool),
    /// Null output
    Null,
}

impl ProjectedValue {
    /// Returns the string content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` if this is [`ProjectedValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ProjectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<ProjectedValue> for serde_json::Value {
    fn from(value: ProjectedValue) -> Self {
        match value {
            ProjectedValue::Text(s) => serde_json::Value::String(s),
            ProjectedValue::Bool(b) => serde_json::Value::Bool(b),
            ProjectedValue::Null => serde_json::Value::Null,
        }
    }
}
