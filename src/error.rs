use thiserror::Error;

/// Errors that can occur while projecting records into resources.
///
/// Every variant describes a mismatch between declared shapes and the records
/// fed to them. None of them is caused by end-user input, so they are
/// surfaced to the caller rather than swallowed.
///
/// # Examples
///
/// ```
/// use field_projection::{project, FieldMap, MapRecord, ProjectionError};
///
/// let map = FieldMap::new().field("email", "email_address");
/// let record = MapRecord::new("user").with("name", "Alice");
///
/// let err = project(&record, &map).unwrap_err();
/// assert!(matches!(err, ProjectionError::FieldNotFound { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProjectionError {
    /// A declared source field does not exist on the record.
    #[error("field '{field}' (output key '{output_key}') not found on {record}")]
    FieldNotFound {
        /// Kind of record that was read (e.g. "user")
        record: String,
        /// Source field that could not be read
        field: String,
        /// Output key the field was declared under
        output_key: String,
    },

    /// The same output key was declared twice in one field map.
    #[error("output key '{key}' declared more than once")]
    DuplicateOutputKey {
        /// The repeated output key
        key: String,
    },

    /// Projection configuration could not be parsed.
    #[error("invalid projection config: {0}")]
    InvalidConfig(String),
}

impl ProjectionError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ProjectionErrorKind {
        match self {
            Self::FieldNotFound { .. } | Self::DuplicateOutputKey { .. } => {
                ProjectionErrorKind::Schema
            }
            Self::InvalidConfig(_) => ProjectionErrorKind::Configuration,
        }
    }
}

/// Broad category of a [`ProjectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionErrorKind {
    /// A field map does not match the records it is applied to.
    Schema,
    /// Engine configuration is malformed.
    Configuration,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProjectionError>;
