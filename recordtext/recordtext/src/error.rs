//! Error types for the record codec.

use recordtext_core::{FormatError, RecordError};

/// Errors produced by [`RecordCodec`](crate::RecordCodec).
///
/// None of these are recovered from locally: the first failure aborts the
/// whole call and no partial output is produced.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A field value could not be read from the record.
    #[error("cannot read field '{field}': {detail}")]
    Access { field: String, detail: String },

    /// A value does not match the canonical pattern of its declared type.
    #[error("field '{field}': {source}")]
    Format {
        field: String,
        #[source]
        source: FormatError,
    },

    /// The serialized text violates the `'<name>'='<value>'` line grammar.
    #[error("malformed line {line}: {detail}")]
    Parse { line: usize, detail: String },

    /// The target record could not be built from the converted values.
    #[error("cannot instantiate {type_name}: {source}")]
    Instantiation {
        type_name: &'static str,
        #[source]
        source: RecordError,
    },

    /// A field declared on the target record has no line in the text.
    #[error("missing field '{field}'")]
    MissingField { field: String },
}
