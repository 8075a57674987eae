//! Encoder and decoder bound to one formatting-rule table.

use recordtext_core::{FieldDefs, FormatRules, Record, Value};

use crate::{decoder::decode_values, encoder::encode_values, error::CodecError};

/// Serializes and deserializes records with a shared [`FormatRules`] table.
///
/// Both directions consult the same table.
#[derive(Clone, Default)]
pub struct RecordCodec {
    rules: FormatRules,
}

impl RecordCodec {
    pub fn new(rules: FormatRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &FormatRules {
        &self.rules
    }

    /// Render every field of `record`, one line per field in declaration order.
    pub fn serialize<R: Record>(&self, record: &R) -> Result<String, CodecError> {
        self.serialize_values(&R::field_defs(), &record.values())
    }

    /// Build a fresh `R` from serialized text.
    ///
    /// All declared fields must be present; lines naming undeclared fields
    /// are ignored.
    pub fn deserialize<R: Record>(&self, text: &str) -> Result<R, CodecError> {
        let values = self.deserialize_values(&R::field_defs(), text)?;
        R::from_values(values).map_err(|source| CodecError::Instantiation {
            type_name: std::any::type_name::<R>(),
            source,
        })
    }

    /// Serialize values described by a runtime schema instead of a [`Record`] type.
    pub fn serialize_values(
        &self,
        fields: &FieldDefs,
        values: &[Value],
    ) -> Result<String, CodecError> {
        encode_values(&self.rules, fields, values)
    }

    /// Deserialize values described by a runtime schema instead of a [`Record`] type.
    pub fn deserialize_values(
        &self,
        fields: &FieldDefs,
        text: &str,
    ) -> Result<Vec<Value>, CodecError> {
        decode_values(&self.rules, fields, text)
    }
}
