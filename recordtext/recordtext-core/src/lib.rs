//! Codec-independent core types for `recordtext`.
//!
//! This crate provides the typed intermediate representation ([`Value`] /
//! [`FieldType`]), the field descriptor list a record exposes instead of
//! runtime reflection ([`Record`] / [`FieldDefs`]) and the canonical
//! formatting-rule table shared by the encoder and the decoder
//! ([`FormatRules`]).

mod codecs;
mod error;
mod record;
mod rules;
mod schema;
mod value;

pub use codecs::{
    DATE_PATTERN, DATETIME_PATTERN, DateCodec, DateTimeCodec, I32Codec, TIME_PATTERN, TextCodec,
    TimeCodec,
};
pub use error::{FormatError, RecordError, ValueTypeError};
pub use record::{FieldValue, Record};
pub use rules::{FormatRules, FormatRulesBuilder, UnknownTypePolicy, ValueCodec};
pub use schema::{FieldDef, FieldDefs, FieldType, format_field_defs};
pub use value::Value;
