use std::collections::{HashMap, hash_map};

use recordtext_core::{FieldDefs, FormatRules, Value};
use tracing::debug;

use crate::error::CodecError;

/// Field name → raw (still textual) value, as found in serialized text.
///
/// Lookups are by name; the line order of the input is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValueMap(HashMap<String, String>);

impl FieldValueMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

/// Split serialized text into its `name → raw value` pairs.
///
/// Blank lines are skipped. Every other line must have the shape
/// `'<name>'='<value>'`; the split happens on the first `='`, so the value may
/// itself contain quotes. When a name occurs more than once the last line wins.
pub fn parse_field_values(text: &str) -> Result<FieldValueMap, CodecError> {
    let mut values = HashMap::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, raw) = parse_line(line).map_err(|detail| CodecError::Parse {
            line: index + 1,
            detail: detail.to_string(),
        })?;
        if values.insert(name.to_string(), raw.to_string()).is_some() {
            debug!(field = name, line = index + 1, "duplicate field, last value wins");
        }
    }

    Ok(FieldValueMap(values))
}

fn parse_line(line: &str) -> Result<(&str, &str), &'static str> {
    let (quoted_name, rest) = line.split_once("='").ok_or("missing `='` delimiter")?;
    let name = quoted_name
        .strip_prefix('\'')
        .and_then(|name| name.strip_suffix('\''))
        .ok_or("field name is not enclosed in quotes")?;
    let raw = rest.strip_suffix('\'').ok_or("missing closing quote")?;
    Ok((name, raw))
}

/// Convert the lines of `text` into one value per field of `fields`, in field order.
pub(crate) fn decode_values(
    rules: &FormatRules,
    fields: &FieldDefs,
    text: &str,
) -> Result<Vec<Value>, CodecError> {
    let raw_values = parse_field_values(text)?;

    for (name, _) in raw_values.iter() {
        if fields.get(name).is_none() {
            debug!(field = %name, "ignoring undeclared field");
        }
    }

    let values = fields
        .iter()
        .map(|field| {
            let raw = raw_values
                .get(&field.name)
                .ok_or_else(|| CodecError::MissingField {
                    field: field.name.clone(),
                })?;
            rules
                .parse(&field.field_type, raw)
                .map_err(|source| CodecError::Format {
                    field: field.name.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(fields = fields.len(), "deserialized record");
    Ok(values)
}
