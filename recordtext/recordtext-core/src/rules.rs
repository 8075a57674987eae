//! The formatting-rule table shared by the encoder and the decoder.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    codecs::{DateCodec, DateTimeCodec, I32Codec, TextCodec, TimeCodec},
    error::FormatError,
    schema::FieldType,
    value::Value,
};

/// Bidirectional text conversion for a single [`FieldType`].
///
/// Implementations are registered with [`FormatRules`] and dispatched on
/// [`ValueCodec::field_type`].
pub trait ValueCodec: Send + Sync {
    /// Returns the type tag this codec handles.
    fn field_type(&self) -> FieldType;

    /// Human-readable description of the canonical text form.
    fn pattern(&self) -> &str;

    /// Render a value in its canonical text form.
    fn format(&self, value: &Value) -> Result<String, FormatError>;

    /// Parse the canonical text form back into a value.
    fn parse(&self, raw: &str) -> Result<Value, FormatError>;
}

/// How [`FormatRules`] treats a type tag with no registered codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Fail with [`FormatError::UnsupportedType`].
    #[default]
    Reject,
    /// Carry the value as raw text in both directions. The runtime value must
    /// be [`Value::Text`].
    Passthrough,
}

/// Type-tag → codec dispatch table.
#[derive(Clone)]
pub struct FormatRules {
    codecs: HashMap<FieldType, Arc<dyn ValueCodec>>,
    unknown_types: UnknownTypePolicy,
}

/// Builder for configuring [`FormatRules`].
pub struct FormatRulesBuilder {
    codecs: Vec<Arc<dyn ValueCodec>>,
    unknown_types: UnknownTypePolicy,
}

impl FormatRules {
    /// Create a builder for [`FormatRules`].
    pub fn builder() -> FormatRulesBuilder {
        FormatRulesBuilder {
            codecs: Vec::new(),
            unknown_types: UnknownTypePolicy::default(),
        }
    }

    /// A table without codecs; every type falls to the unknown-type policy.
    pub fn empty() -> Self {
        Self {
            codecs: HashMap::new(),
            unknown_types: UnknownTypePolicy::default(),
        }
    }

    /// Register a codec, replacing any codec previously registered for its type.
    pub fn register_codec(&mut self, codec: Box<dyn ValueCodec>) {
        self.register_shared_codec(Arc::from(codec));
    }

    pub fn register_shared_codec(&mut self, codec: Arc<dyn ValueCodec>) {
        self.codecs.insert(codec.field_type(), codec);
    }

    pub fn codec(&self, field_type: &FieldType) -> Option<&dyn ValueCodec> {
        self.codecs.get(field_type).map(|codec| codec.as_ref())
    }

    pub fn unknown_types(&self) -> UnknownTypePolicy {
        self.unknown_types
    }

    /// Render `value` in the canonical text form of `field_type`.
    pub fn format(&self, field_type: &FieldType, value: &Value) -> Result<String, FormatError> {
        match self.codec(field_type) {
            Some(codec) => codec.format(value),
            None => {
                self.passthrough(field_type)?;
                Ok(value.try_text()?.to_string())
            }
        }
    }

    /// Parse `raw` as a value of `field_type`.
    pub fn parse(&self, field_type: &FieldType, raw: &str) -> Result<Value, FormatError> {
        match self.codec(field_type) {
            Some(codec) => codec.parse(raw),
            None => {
                self.passthrough(field_type)?;
                Ok(Value::text(raw))
            }
        }
    }

    fn passthrough(&self, field_type: &FieldType) -> Result<(), FormatError> {
        match self.unknown_types {
            UnknownTypePolicy::Passthrough => Ok(()),
            UnknownTypePolicy::Reject => Err(FormatError::UnsupportedType {
                type_name: field_type.type_name().to_string(),
            }),
        }
    }
}

/// The canonical table: the five built-in codecs, unknown types rejected.
impl Default for FormatRules {
    fn default() -> Self {
        Self::builder().with_default_codecs().build()
    }
}

impl FormatRulesBuilder {
    /// Register a codec. Later registrations for the same type win.
    pub fn with_codec(mut self, codec: Box<dyn ValueCodec>) -> Self {
        self.codecs.push(Arc::from(codec));
        self
    }

    /// Register the built-in text, integer, date, time and date-time codecs.
    pub fn with_default_codecs(self) -> Self {
        self.with_codec(Box::new(TextCodec))
            .with_codec(Box::new(I32Codec))
            .with_codec(Box::new(DateCodec::new()))
            .with_codec(Box::new(TimeCodec::new()))
            .with_codec(Box::new(DateTimeCodec::new()))
    }

    /// Set the policy for type tags without a codec (default: reject).
    pub fn unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Build the rule table.
    pub fn build(self) -> FormatRules {
        let mut rules = FormatRules::empty();
        rules.unknown_types = self.unknown_types;
        for codec in self.codecs {
            rules.register_shared_codec(codec);
        }
        rules
    }
}
