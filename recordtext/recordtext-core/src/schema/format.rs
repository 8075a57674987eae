use std::fmt::{Error, Result, Write as _};

use super::FieldDef;
use crate::rules::FormatRules;

/// Format field definitions one per line, together with the canonical
/// pattern `rules` applies to each field:
///
/// ```text
/// startDate: { type: date, pattern: dd.MM.yyyy }
/// ```
///
/// Fields whose type has no registered rule are shown with pattern `-`.
pub fn format_field_defs(
    fields: impl AsRef<[FieldDef]>,
    rules: &FormatRules,
) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_field(field, rules, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &FieldDef, rules: &FormatRules, out: &mut String) -> Result {
    let pattern = rules
        .codec(&field.field_type)
        .map(|codec| codec.pattern())
        .unwrap_or("-");
    writeln!(
        out,
        "{}: {{ type: {}, pattern: {pattern} }}",
        field.name,
        field.field_type.type_name()
    )
}
