use recordtext_core::{FieldDefs, FormatRules, Value};
use tracing::{debug, warn};

use crate::error::CodecError;

/// Render `values` (one per field of `fields`, same order) as serialized text.
pub(crate) fn encode_values(
    rules: &FormatRules,
    fields: &FieldDefs,
    values: &[Value],
) -> Result<String, CodecError> {
    if values.len() > fields.len() {
        return Err(CodecError::Access {
            field: format!("#{}", fields.len()),
            detail: format!(
                "record yielded {} values for {} fields",
                values.len(),
                fields.len()
            ),
        });
    }

    let mut out = String::new();
    for (index, field) in fields.iter().enumerate() {
        let value = values.get(index).ok_or_else(|| CodecError::Access {
            field: field.name.clone(),
            detail: format!(
                "record yielded {} values for {} fields",
                values.len(),
                fields.len()
            ),
        })?;
        let formatted = rules
            .format(&field.field_type, value)
            .map_err(|source| CodecError::Format {
                field: field.name.clone(),
                source,
            })?;
        if formatted.contains('\n') {
            warn!(
                field = %field.name,
                "value contains a line break and will not decode back unchanged"
            );
        }

        out.push('\'');
        out.push_str(&field.name);
        out.push_str("'='");
        out.push_str(&formatted);
        out.push_str("'\n");
    }

    debug!(fields = fields.len(), bytes = out.len(), "serialized record");
    Ok(out)
}
