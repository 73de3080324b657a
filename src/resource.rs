//! Named resource shapes, request-scoped projection and response envelopes.
//!
//! A [`ResourceShape`] is a named, static [`FieldMap`] such as "user" or
//! "listing". Shapes hold no behaviour of their own; they hand their map to a
//! [`Projector`]. A [`ResourceRequest`] ties projection to one inbound read
//! request so collection failures are logged with its request ID, and wraps
//! results in an [`Envelope`] ready for the response body.
//!
//! # Example Flow
//!
//! ```
//! use field_projection::{shapes, MapRecord, ResourceRequest};
//!
//! let role = MapRecord::new("role")
//!     .with("id", 2)
//!     .with("name", "seller")
//!     .with("display_name", "Seller");
//!
//! let request = ResourceRequest::new("req-42");
//! let envelope = request.one(&shapes::role(), &role).expect("role shape matches");
//!
//! assert_eq!(
//!     envelope.to_json().to_string(),
//!     r#"{"data":{"id":"2","name":"seller","displayName":"Seller"}}"#
//! );
//! ```

use serde::Serialize;

use crate::config::{MissingFieldPolicy, ProjectionConfig};
use crate::error::{ProjectionError, Result};
use crate::{FieldMap, FieldReadable, ProjectedOutput, ProjectionLog, Projector};

/// A named output shape composed of a field map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceShape {
    name: String,
    fields: FieldMap,
}

impl ResourceShape {
    /// Creates a shape from a name and its field declarations.
    pub fn new(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared fields.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Projects a record with the default projector.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::FieldNotFound`] if the record lacks a
    /// required field of this shape.
    pub fn project<R>(&self, record: &R) -> Result<ProjectedOutput>
    where
        R: FieldReadable + ?Sized,
    {
        self.project_with(&Projector::default(), record)
    }

    /// Projects a record with the given projector.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::FieldNotFound`] if the record lacks a
    /// required field of this shape.
    pub fn project_with<R>(&self, projector: &Projector, record: &R) -> Result<ProjectedOutput>
    where
        R: FieldReadable + ?Sized,
    {
        projector.project(record, &self.fields)
    }
}

/// A record left out of a collection under [`MissingFieldPolicy::SkipRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the input sequence
    pub index: usize,
    /// Why it could not be projected
    pub error: ProjectionError,
}

/// Result of projecting a sequence of records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectedCollection {
    /// Projected records, in input order
    pub items: Vec<ProjectedOutput>,
    /// Records that were skipped, in input order
    pub skipped: Vec<SkippedRecord>,
}

/// Projection scoped to a single inbound read request.
///
/// # Examples
///
/// ```
/// use field_projection::{
///     FieldMap, MapRecord, MissingFieldPolicy, ProjectionConfig, ResourceRequest, ResourceShape,
/// };
///
/// let shape = ResourceShape::new("user", FieldMap::new().same("name"));
/// let records = vec![
///     MapRecord::new("user").with("name", "Alice"),
///     MapRecord::new("user"),
/// ];
///
/// let request = ResourceRequest::new("req-7").with_config(
///     ProjectionConfig::new().with_missing_field_policy(MissingFieldPolicy::SkipRecord),
/// );
/// let projected = request.project_all(&shape, &records).unwrap();
///
/// assert_eq!(projected.items.len(), 1);
/// assert_eq!(projected.skipped[0].index, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    request_id: String,
    projector: Projector,
}

impl ResourceRequest {
    /// Creates a request scope with the default configuration.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            projector: Projector::default(),
        }
    }

    /// Replaces the projection configuration.
    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.projector = Projector::new(config);
        self
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the projector used for this request.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Returns a logger tagged with this request and `shape`.
    pub fn log<'a>(&'a self, shape: &'a ResourceShape) -> ProjectionLog<'a> {
        ProjectionLog::new(&self.request_id, shape.name())
    }

    /// Projects a single record into a `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns the projection error unchanged; it is also logged.
    pub fn one<R>(&self, shape: &ResourceShape, record: &R) -> Result<Envelope>
    where
        R: FieldReadable + ?Sized,
    {
        match shape.project_with(&self.projector, record) {
            Ok(output) => Ok(Envelope::one(output)),
            Err(err) => {
                self.log(shape)
                    .error(format_args!("resource projection failed: {}", err));
                Err(err)
            }
        }
    }

    /// Projects a sequence of records, applying the configured
    /// [`MissingFieldPolicy`] to records that fail.
    ///
    /// # Errors
    ///
    /// Under [`MissingFieldPolicy::Fail`], returns the first record's error.
    /// Under [`MissingFieldPolicy::SkipRecord`], never fails.
    pub fn project_all<I>(&self, shape: &ResourceShape, records: I) -> Result<ProjectedCollection>
    where
        I: IntoIterator,
        I::Item: FieldReadable,
    {
        let log = self.log(shape);
        let policy = self.projector.config().missing_field_policy;
        let mut collection = ProjectedCollection::default();

        for (index, record) in records.into_iter().enumerate() {
            match shape.project_with(&self.projector, &record) {
                Ok(output) => collection.items.push(output),
                Err(err) => match policy {
                    MissingFieldPolicy::Fail => {
                        log.error(format_args!(
                            "collection projection failed at record {}: {}",
                            index, err
                        ));
                        return Err(err);
                    }
                    MissingFieldPolicy::SkipRecord => {
                        log.warn(format_args!("skipping record {}: {}", index, err));
                        collection.skipped.push(SkippedRecord { index, error: err });
                    }
                },
            }
        }

        log.debug(format_args!(
            "projected {} records, skipped {}",
            collection.items.len(),
            collection.skipped.len()
        ));
        Ok(collection)
    }

    /// Projects a sequence of records into a `data` array envelope.
    ///
    /// # Errors
    ///
    /// See [`project_all`](Self::project_all).
    pub fn collection<I>(&self, shape: &ResourceShape, records: I) -> Result<Envelope>
    where
        I: IntoIterator,
        I::Item: FieldReadable,
    {
        let projected = self.project_all(shape, records)?;
        Ok(Envelope::many(projected.items))
    }
}

/// Page position for paginated collection responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// One-based page number
    pub page: u64,
    /// Page size
    pub per_page: u64,
    /// Total number of records across all pages
    pub total: u64,
}

impl Pagination {
    /// Returns the last page number; at least 1, even when there are no records.
    pub fn last_page(&self) -> u64 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum EnvelopeData {
    One(ProjectedOutput),
    Many(Vec<ProjectedOutput>),
}

/// Response body wrapper: `{"data": ..., "meta": {...}}`.
///
/// `meta` is emitted only when something was added to it.
///
/// # Examples
///
/// ```
/// use field_projection::{Envelope, Pagination};
///
/// let envelope = Envelope::many(Vec::new()).with_pagination(Pagination {
///     page: 1,
///     per_page: 20,
///     total: 0,
/// });
///
/// assert_eq!(
///     envelope.to_json().to_string(),
///     r#"{"data":[],"meta":{"current_page":1,"per_page":20,"total":0,"last_page":1}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    data: EnvelopeData,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    meta: serde_json::Map<String, serde_json::Value>,
}

impl Envelope {
    /// Wraps a single projected record.
    pub fn one(output: ProjectedOutput) -> Self {
        Self {
            data: EnvelopeData::One(output),
            meta: serde_json::Map::new(),
        }
    }

    /// Wraps a list of projected records.
    pub fn many(outputs: Vec<ProjectedOutput>) -> Self {
        Self {
            data: EnvelopeData::Many(outputs),
            meta: serde_json::Map::new(),
        }
    }

    /// Adds or replaces a `meta` entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Adds pagination entries to `meta`.
    pub fn with_pagination(self, pagination: Pagination) -> Self {
        self.with_meta("current_page", pagination.page)
            .with_meta("per_page", pagination.per_page)
            .with_meta("total", pagination.total)
            .with_meta("last_page", pagination.last_page())
    }

    /// Returns the single record, if this envelope wraps one.
    pub fn item(&self) -> Option<&ProjectedOutput> {
        match &self.data {
            EnvelopeData::One(output) => Some(output),
            EnvelopeData::Many(_) => None,
        }
    }

    /// Returns the records, if this envelope wraps a list.
    pub fn items(&self) -> Option<&[ProjectedOutput]> {
        match &self.data {
            EnvelopeData::One(_) => None,
            EnvelopeData::Many(outputs) => Some(outputs),
        }
    }

    /// Returns the `meta` entries.
    pub fn meta(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.meta
    }

    /// Converts into a JSON value, keeping key order.
    pub fn to_json(&self) -> serde_json::Value {
        let data = match &self.data {
            EnvelopeData::One(output) => output.to_json(),
            EnvelopeData::Many(outputs) => {
                serde_json::Value::Array(outputs.iter().map(ProjectedOutput::to_json).collect())
            }
        };

        let mut body = serde_json::Map::new();
        body.insert("data".to_string(), data);
        if !self.meta.is_empty() {
            body.insert("meta".to_string(), serde_json::Value::Object(self.meta.clone()));
        }
        serde_json::Value::Object(body)
    }
}
