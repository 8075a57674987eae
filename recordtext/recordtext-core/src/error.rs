//! Error types shared by the value, record and rule layers.

/// A [`Value`](crate::Value) variant did not match the variant the caller expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value type mismatch: expected {expected}, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Error returned by [`ValueCodec`](crate::ValueCodec) implementations and
/// [`FormatRules`](crate::FormatRules) in either direction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Raw text does not match the canonical pattern of the declared type.
    #[error("invalid {type_name} value '{raw}': {detail}")]
    InvalidValue {
        type_name: String,
        raw: String,
        detail: String,
    },

    /// The runtime value does not belong to the declared type.
    #[error(transparent)]
    TypeMismatch(#[from] ValueTypeError),

    /// No rule is registered for the declared type and passthrough is disabled.
    #[error("no formatting rule registered for type '{type_name}'")]
    UnsupportedType { type_name: String },
}

/// Error returned by [`Record::from_values`](crate::Record::from_values).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Fewer values were supplied than the record declares fields.
    #[error("no value supplied for field '{field}'")]
    MissingValue { field: String },

    /// More values were supplied than the record declares fields.
    #[error("expected {expected} values, got {actual}")]
    UnexpectedValues { expected: usize, actual: usize },

    /// A value could not be converted to the Rust type of its field.
    #[error("field '{field}': {source}")]
    ValueType {
        field: String,
        #[source]
        source: ValueTypeError,
    },
}
