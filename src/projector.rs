//! The field projection engine.
//!
//! A projection reads each declared source field from a record, coerces the
//! tagged value into a wire-safe one and emits it under its output key:
//!
//! | Value | Output |
//! |---|---|
//! | timestamp, date | ISO-8601 UTC string (`Z` suffix), configured precision |
//! | bool | unchanged |
//! | null | `null` |
//! | text | unchanged |
//! | int, float | decimal string |
//! | json | scalars as above, numbers as text, arrays/objects as compact JSON text |
//!
//! Projection is pure. UTC is fixed, so no local timezone or locale affects
//! the output, and the same record and map always give the same result.

use chrono::{DateTime, NaiveTime, Utc};

use crate::config::{ProjectionConfig, TimestampPrecision};
use crate::error::{ProjectionError, Result};
use crate::{FieldMap, FieldReadable, FieldValue, Inclusion, ProjectedOutput, ProjectedValue};

/// Projects a record through a field map with the default configuration.
///
/// # Errors
///
/// Returns [`ProjectionError::FieldNotFound`] if a required field is not
/// exposed by the record. No partial output is returned.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use field_projection::{project, FieldMap, MapRecord, ProjectedValue};
///
/// let map = FieldMap::new()
///     .same("name")
///     .field("createdAt", "created_at")
///     .field("isActive", "is_active");
///
/// let record = MapRecord::new("user")
///     .with("name", "Alice")
///     .with("created_at", Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
///     .with("is_active", true);
///
/// let output = project(&record, &map).unwrap();
/// assert_eq!(
///     output.get("createdAt"),
///     Some(&ProjectedValue::Text("2024-01-15T10:00:00.000Z".to_string()))
/// );
/// assert_eq!(output.get("isActive"), Some(&ProjectedValue::Bool(true)));
/// ```
pub fn project<R>(record: &R, map: &FieldMap) -> Result<ProjectedOutput>
where
    R: FieldReadable + ?Sized,
{
    Projector::default().project(record, map)
}

/// A configured projection engine.
///
/// Stateless apart from its configuration, so one projector can be shared
/// freely across threads and requests.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use field_projection::{FieldMap, MapRecord, ProjectionConfig, Projector, TimestampPrecision};
///
/// let projector = Projector::new(
///     ProjectionConfig::new().with_timestamp_precision(TimestampPrecision::Seconds),
/// );
/// let record = MapRecord::new("listing")
///     .with("published_at", Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap());
/// let map = FieldMap::new().field("publishedAt", "published_at");
///
/// let output = projector.project(&record, &map).unwrap();
/// assert_eq!(output.get("publishedAt").unwrap().as_str(), Some("2024-03-01T08:30:00Z"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Projector {
    /// Creates a projector with the given configuration.
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Projects `record` through `map`.
    ///
    /// Entries are visited in declaration order. Required entries must be
    /// readable; [`Inclusion::WhenPresent`] entries are skipped when the
    /// record does not expose them.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::FieldNotFound`] for the first required
    /// field the record does not expose.
    pub fn project<R>(&self, record: &R, map: &FieldMap) -> Result<ProjectedOutput>
    where
        R: FieldReadable + ?Sized,
    {
        let mut output = ProjectedOutput::with_capacity(map.len());

        for spec in map {
            let value = match (record.read(spec.source_field()), spec.inclusion()) {
                (Some(value), _) => value,
                (None, Inclusion::WhenPresent) => continue,
                (None, Inclusion::Always) => {
                    tracing::debug!(
                        record = record.record_kind(),
                        field = spec.source_field(),
                        output_key = spec.output_key(),
                        "declared field not found on record"
                    );
                    return Err(ProjectionError::FieldNotFound {
                        record: record.record_kind().to_string(),
                        field: spec.source_field().to_string(),
                        output_key: spec.output_key().to_string(),
                    });
                }
            };

            output.push(spec.output_key(), self.coerce(spec.output_key(), value));
        }

        tracing::trace!(
            record = record.record_kind(),
            fields = output.len(),
            "projected record"
        );
        Ok(output)
    }

    /// Applies the coercion table to a single value.
    ///
    /// `key` is only used to label ambiguity warnings.
    pub fn coerce(&self, key: &str, value: FieldValue) -> ProjectedValue {
        match value {
            FieldValue::Timestamp(ts) => {
                ProjectedValue::Text(format_timestamp(ts, self.config.timestamp_precision))
            }
            FieldValue::Date(date) => ProjectedValue::Text(format_timestamp(
                date.and_time(NaiveTime::MIN).and_utc(),
                self.config.timestamp_precision,
            )),
            FieldValue::Bool(b) => ProjectedValue::Bool(b),
            FieldValue::Null => ProjectedValue::Null,
            FieldValue::Text(s) => ProjectedValue::Text(s),
            FieldValue::Int(i) => ProjectedValue::Text(i.to_string()),
            FieldValue::Float(f) => ProjectedValue::Text(f.to_string()),
            FieldValue::Json(json) => coerce_json(key, json),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>, precision: TimestampPrecision) -> String {
    ts.to_rfc3339_opts(precision.seconds_format(), true)
}

fn coerce_json(key: &str, json: serde_json::Value) -> ProjectedValue {
    match json {
        serde_json::Value::Null => ProjectedValue::Null,
        serde_json::Value::Bool(b) => ProjectedValue::Bool(b),
        serde_json::Value::String(s) => ProjectedValue::Text(s),
        serde_json::Value::Number(n) => ProjectedValue::Text(n.to_string()),
        structured => {
            tracing::warn!(
                output_key = key,
                "structured value stringified; declare a dedicated field type instead"
            );
            ProjectedValue::Text(structured.to_string())
        }
    }
}
