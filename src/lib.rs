//! Type-aware field projection for API resources.
//!
//! This crate turns domain records into flat, JSON-safe key/value structures
//! through declarative field maps:
//! - **Records** expose named fields through [`FieldReadable`], tagging each
//!   value with its type ([`FieldValue`]) at the accessor boundary
//! - **Field maps** declare which output key exposes which source field, in order
//! - **Projection** coerces every value to a string, boolean or null
//!   ([`ProjectedValue`]); timestamps become ISO-8601 UTC strings
//!
//! # Core Types
//!
//! - [`FieldMap`]: Ordered output-key → source-field declarations
//! - [`Projector`]: Configured projection engine; [`project`] uses the defaults
//! - [`ProjectedOutput`]: Ordered, serializable projection result
//! - [`ResourceShape`]: Named field map such as a user or listing resource
//! - [`ResourceRequest`]: Request-scoped projection with logging and envelopes
//! - [`ProjectionError`]: Schema and configuration errors
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use field_projection::{project, FieldMap, MapRecord};
//!
//! let map = FieldMap::new()
//!     .same("name")
//!     .field("createdAt", "created_at")
//!     .field("isActive", "is_active");
//!
//! let record = MapRecord::new("user")
//!     .with("name", "Alice")
//!     .with("created_at", Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
//!     .with("is_active", true)
//!     .with("password_hash", "never-projected");
//!
//! let output = project(&record, &map).expect("every declared field exists");
//! assert_eq!(
//!     serde_json::to_string(&output).unwrap(),
//!     r#"{"name":"Alice","createdAt":"2024-01-15T10:00:00.000Z","isActive":true}"#
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod field_map;
mod logging;
mod output;
mod projector;
mod record;
mod resource;
pub mod shapes;
mod value;

#[cfg(test)]
mod test_utils;

pub use config::{MissingFieldPolicy, ProjectionConfig, TimestampPrecision};
pub use error::{ProjectionError, ProjectionErrorKind, Result};
pub use field_map::{FieldMap, FieldSpec, Inclusion};
pub use logging::ProjectionLog;
pub use output::ProjectedOutput;
pub use projector::{project, Projector};
pub use record::{FieldReadable, MapRecord};
pub use resource::{
    Envelope, Pagination, ProjectedCollection, ResourceRequest, ResourceShape, SkippedRecord,
};
pub use value::{FieldValue, ProjectedValue};
