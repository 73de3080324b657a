//! Projection engine configuration.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Precision of formatted timestamps.
///
/// One precision applies to every timestamp a projector emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPrecision {
    /// `2024-01-15T10:00:00Z`
    Seconds,
    /// `2024-01-15T10:00:00.000Z`
    #[default]
    Millis,
}

impl TimestampPrecision {
    pub(crate) fn seconds_format(self) -> SecondsFormat {
        match self {
            Self::Seconds => SecondsFormat::Secs,
            Self::Millis => SecondsFormat::Millis,
        }
    }
}

/// What a collection projection does with a record that fails to project.
///
/// A single record projection is always all-or-nothing; this policy only
/// decides whether one bad record fails its whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Fail the whole collection on the first failing record.
    #[default]
    Fail,
    /// Log the failure and leave the record out.
    SkipRecord,
}

/// Settings shared by every projection a [`Projector`](crate::Projector) runs.
///
/// # Examples
///
/// ```
/// use field_projection::{MissingFieldPolicy, ProjectionConfig, TimestampPrecision};
///
/// let config = ProjectionConfig::from_json_str(r#"{"timestamp_precision": "seconds"}"#)
///     .expect("valid config");
///
/// assert_eq!(config.timestamp_precision, TimestampPrecision::Seconds);
/// assert_eq!(config.missing_field_policy, MissingFieldPolicy::Fail);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Precision used for every timestamp field
    pub timestamp_precision: TimestampPrecision,
    /// Collection behaviour on failing records
    pub missing_field_policy: MissingFieldPolicy,
}

impl ProjectionConfig {
    /// Creates the default configuration (millisecond timestamps, fail on missing fields).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timestamp precision.
    pub fn with_timestamp_precision(mut self, precision: TimestampPrecision) -> Self {
        self.timestamp_precision = precision;
        self
    }

    /// Sets the collection policy for failing records.
    pub fn with_missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_field_policy = policy;
        self
    }

    /// Parses a configuration from JSON text. Absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidConfig`] if the text is not valid
    /// JSON, has unknown keys, or names an unknown option.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ProjectionError::InvalidConfig(e.to_string()))
    }
}
