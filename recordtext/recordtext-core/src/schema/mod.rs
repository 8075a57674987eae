//! Field descriptor lists describing the shape of a record.

mod format;
mod types;

pub use format::format_field_defs;
pub use types::{FieldDef, FieldDefs, FieldType};
