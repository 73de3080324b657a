//! Ordered declarations of output keys and the source fields behind them.

use crate::error::{ProjectionError, Result};

/// Whether a declared field must be present on every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inclusion {
    /// The field is always emitted; a record without it fails the projection.
    #[default]
    Always,
    /// The field is emitted only when the record exposes it.
    ///
    /// Used for data that is loaded on demand, such as relations.
    WhenPresent,
}

/// One declared output entry of a [`FieldMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    output_key: String,
    source_field: String,
    inclusion: Inclusion,
}

impl FieldSpec {
    /// Key under which the value is emitted.
    pub fn output_key(&self) -> &str {
        &self.output_key
    }

    /// Field read from the record.
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    /// Inclusion rule for this entry.
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }
}

/// An ordered mapping from output key to source field.
///
/// Declaration order is output order. Output keys are unique: the chaining
/// builder methods treat a repeated key as a programming error and panic,
/// while [`try_insert`](Self::try_insert) and
/// [`try_from_pairs`](Self::try_from_pairs) report it as
/// [`ProjectionError::DuplicateOutputKey`] for maps assembled at runtime.
///
/// # Examples
///
/// ```
/// use field_projection::FieldMap;
///
/// let map = FieldMap::new()
///     .same("name")
///     .field("createdAt", "created_at")
///     .field("isActive", "is_active");
///
/// let keys: Vec<&str> = map.output_keys().collect();
/// assert_eq!(keys, vec!["name", "createdAt", "isActive"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap {
    entries: Vec<FieldSpec>,
}

impl FieldMap {
    /// Creates an empty field map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declares a required field.
    ///
    /// # Panics
    ///
    /// Panics if `output_key` is already declared.
    pub fn field(self, output_key: impl Into<String>, source_field: impl Into<String>) -> Self {
        self.declare(output_key.into(), source_field.into(), Inclusion::Always)
    }

    /// Declares a required field whose output key equals its source name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already declared.
    pub fn same(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.declare(name.clone(), name, Inclusion::Always)
    }

    /// Declares a field that is emitted only when the record exposes it.
    ///
    /// # Panics
    ///
    /// Panics if `output_key` is already declared.
    pub fn optional(self, output_key: impl Into<String>, source_field: impl Into<String>) -> Self {
        self.declare(output_key.into(), source_field.into(), Inclusion::WhenPresent)
    }

    fn declare(mut self, output_key: String, source_field: String, inclusion: Inclusion) -> Self {
        if let Err(err) = self.try_insert(output_key, source_field, inclusion) {
            panic!("invalid field map declaration: {}", err);
        }
        self
    }

    /// Appends an entry, rejecting a repeated output key.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::DuplicateOutputKey`] if the key is already
    /// declared. The map is left unchanged in that case.
    pub fn try_insert(
        &mut self,
        output_key: impl Into<String>,
        source_field: impl Into<String>,
        inclusion: Inclusion,
    ) -> Result<()> {
        let output_key = output_key.into();
        if self.contains_key(&output_key) {
            return Err(ProjectionError::DuplicateOutputKey { key: output_key });
        }

        self.entries.push(FieldSpec {
            output_key,
            source_field: source_field.into(),
            inclusion,
        });
        Ok(())
    }

    /// Builds a map of required fields from `(output_key, source_field)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::DuplicateOutputKey`] on the first repeated key.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_projection::FieldMap;
    ///
    /// let map = FieldMap::try_from_pairs([("id", "id"), ("id", "uuid")]);
    /// assert!(map.is_err());
    /// ```
    pub fn try_from_pairs<I, K, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (output_key, source_field) in pairs {
            map.try_insert(output_key, source_field, Inclusion::Always)?;
        }
        Ok(map)
    }

    /// Returns `true` if `output_key` is declared.
    pub fn contains_key(&self, output_key: &str) -> bool {
        self.entries.iter().any(|e| e.output_key == output_key)
    }

    /// Returns the number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.entries.iter()
    }

    /// Iterates output keys in declaration order.
    pub fn output_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.output_key.as_str())
    }

    /// Returns `true` if every entry is [`Inclusion::Always`].
    pub fn is_total(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.inclusion == Inclusion::Always)
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
