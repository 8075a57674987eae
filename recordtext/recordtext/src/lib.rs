//! Line-oriented key-value text codec for typed records.
//!
//! Every field of a [`Record`] becomes one line `'<name>'='<value>'`, with the
//! value rendered by the canonical rule of the field's type:
//!
//! ```text
//! 'title'='Test meeting'
//! 'usersLimit'='45'
//! 'startDate'='20.08.2023'
//! 'startTimeFrom'='10:00:00'
//! 'registrationAvailableUntil'='19.08.2023 10:45:30'
//! ```
//!
//! Values are not escaped. Embedded `'` characters survive a round trip
//! because the decoder splits each line on the first `='` and strips exactly
//! one closing quote, but a value containing a line break produces text that
//! does not decode back to the same record.
//!
//! # Pipeline
//!
//! ```text
//! record ── Record::values ── FormatRules::format ── lines          (encoder)
//! lines ── parse_field_values ── FormatRules::parse ── Record::from_values  (decoder)
//! ```

mod codec;
mod decoder;
mod encoder;
mod error;

use std::sync::LazyLock;

pub use codec::RecordCodec;
pub use decoder::{FieldValueMap, parse_field_values};
pub use error::CodecError;
pub use recordtext_core as core;
pub use recordtext_core::{FieldValue, Record, Value, impl_record};

static DEFAULT_CODEC: LazyLock<RecordCodec> = LazyLock::new(RecordCodec::default);

/// Serialize `record` with the canonical rule table.
pub fn serialize<R: Record>(record: &R) -> Result<String, CodecError> {
    DEFAULT_CODEC.serialize(record)
}

/// Deserialize a fresh `R` from `text` with the canonical rule table.
pub fn deserialize<R: Record>(text: &str) -> Result<R, CodecError> {
    DEFAULT_CODEC.deserialize(text)
}
