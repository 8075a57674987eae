use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Type tag attached to every field; the dispatch key of [`FormatRules`](crate::FormatRules).
///
/// Variant names mirror [`Value`](crate::Value) for the built-in types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    I32,
    Date,
    Time,
    DateTime,
    /// Application-defined type, formatted by a registered codec or passed through.
    Custom(String),
}

impl FieldType {
    pub fn type_name(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::I32 => "i32",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::DateTime => "datetime",
            FieldType::Custom(name) => name,
        }
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "i32" => Self::I32,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::DateTime,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

/// Name and type tag of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered collection of [`FieldDef`]; order is the record's declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }

    /// Look up a field by its serialized name.
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.0.iter().find(|field| field.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|field| field.name.as_str())
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl From<FieldDefs> for Vec<FieldDef> {
    fn from(value: FieldDefs) -> Self {
        value.0
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for field in self.iter() {
            writeln!(f, "{}: {}", field.name, field.field_type)?;
        }
        Ok(())
    }
}
