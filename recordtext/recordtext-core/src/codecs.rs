//! Built-in [`ValueCodec`] implementations forming the canonical rule table.
//!
//! | type       | pattern               | example               |
//! |------------|-----------------------|-----------------------|
//! | `date`     | `dd.MM.yyyy`          | `20.08.2023`          |
//! | `time`     | `HH:mm:ss`            | `10:00:00`            |
//! | `datetime` | `dd.MM.yyyy HH:mm:ss` | `19.08.2023 10:45:30` |
//! | `i32`      | decimal               | `45`                  |
//! | `text`     | verbatim              | `Test meeting`        |

use std::fmt::{Display, Write as _};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{error::FormatError, rules::ValueCodec, schema::FieldType, value::Value};

/// chrono format string of the canonical calendar-date pattern `dd.MM.yyyy`.
pub const DATE_PATTERN: &str = "%d.%m.%Y";
/// chrono format string of the canonical time-of-day pattern `HH:mm:ss`.
pub const TIME_PATTERN: &str = "%H:%M:%S";
/// chrono format string of the canonical date-and-time pattern `dd.MM.yyyy HH:mm:ss`.
pub const DATETIME_PATTERN: &str = "%d.%m.%Y %H:%M:%S";

fn invalid(field_type: &FieldType, raw: &str, detail: impl ToString) -> FormatError {
    FormatError::InvalidValue {
        type_name: field_type.type_name().to_string(),
        raw: raw.to_string(),
        detail: detail.to_string(),
    }
}

// chrono reports an unusable format string as a `fmt::Error` while rendering.
fn render(
    field_type: &FieldType,
    format: &str,
    formatted: impl Display,
) -> Result<String, FormatError> {
    let mut out = String::new();
    write!(out, "{formatted}").map_err(|_| FormatError::InvalidValue {
        type_name: field_type.type_name().to_string(),
        raw: format.to_string(),
        detail: "unusable format string".to_string(),
    })?;
    Ok(out)
}

// chrono accepts narrower fields than the pattern prints (`1.8.23` for
// `%d.%m.%Y`); only text that renders back identically is canonical.
fn ensure_canonical(
    field_type: &FieldType,
    format: &str,
    raw: &str,
    parsed: impl Display,
) -> Result<(), FormatError> {
    if render(field_type, format, parsed)? == raw {
        Ok(())
    } else {
        Err(invalid(
            field_type,
            raw,
            format!("does not match the fixed-width pattern '{format}'"),
        ))
    }
}

/// Text values are written and read verbatim, without escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl ValueCodec for TextCodec {
    fn field_type(&self) -> FieldType {
        FieldType::Text
    }

    fn pattern(&self) -> &str {
        "verbatim"
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        Ok(value.try_text()?.to_string())
    }

    fn parse(&self, raw: &str) -> Result<Value, FormatError> {
        Ok(Value::text(raw))
    }
}

/// 32-bit signed integers in plain decimal notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct I32Codec;

impl ValueCodec for I32Codec {
    fn field_type(&self) -> FieldType {
        FieldType::I32
    }

    fn pattern(&self) -> &str {
        "decimal"
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        Ok(value.try_i32()?.to_string())
    }

    fn parse(&self, raw: &str) -> Result<Value, FormatError> {
        raw.parse::<i32>()
            .map(Value::I32)
            .map_err(|e| invalid(&FieldType::I32, raw, e))
    }
}

/// Calendar dates, `dd.MM.yyyy` unless configured otherwise.
#[derive(Debug, Clone)]
pub struct DateCodec {
    format: String,
    display: String,
}

impl DateCodec {
    pub fn new() -> Self {
        Self {
            format: DATE_PATTERN.to_string(),
            display: "dd.MM.yyyy".to_string(),
        }
    }

    /// Use a different chrono format string; it is also shown as the pattern.
    pub fn with_format(format: impl Into<String>) -> Self {
        let format = format.into();
        Self {
            display: format.clone(),
            format,
        }
    }
}

impl Default for DateCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCodec for DateCodec {
    fn field_type(&self) -> FieldType {
        FieldType::Date
    }

    fn pattern(&self) -> &str {
        &self.display
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        let formatted = value.try_date()?.format(&self.format);
        render(&FieldType::Date, &self.format, formatted)
    }

    fn parse(&self, raw: &str) -> Result<Value, FormatError> {
        let parsed = NaiveDate::parse_from_str(raw, &self.format)
            .map_err(|e| invalid(&FieldType::Date, raw, e))?;
        ensure_canonical(&FieldType::Date, &self.format, raw, parsed.format(&self.format))?;
        Ok(Value::Date(parsed))
    }
}

/// Times of day on a 24-hour clock, `HH:mm:ss` unless configured otherwise.
///
/// Sub-second precision is not part of the canonical pattern and is dropped
/// when formatting.
#[derive(Debug, Clone)]
pub struct TimeCodec {
    format: String,
    display: String,
}

impl TimeCodec {
    pub fn new() -> Self {
        Self {
            format: TIME_PATTERN.to_string(),
            display: "HH:mm:ss".to_string(),
        }
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        let format = format.into();
        Self {
            display: format.clone(),
            format,
        }
    }
}

impl Default for TimeCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCodec for TimeCodec {
    fn field_type(&self) -> FieldType {
        FieldType::Time
    }

    fn pattern(&self) -> &str {
        &self.display
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        let formatted = value.try_time()?.format(&self.format);
        render(&FieldType::Time, &self.format, formatted)
    }

    fn parse(&self, raw: &str) -> Result<Value, FormatError> {
        let parsed = NaiveTime::parse_from_str(raw, &self.format)
            .map_err(|e| invalid(&FieldType::Time, raw, e))?;
        ensure_canonical(&FieldType::Time, &self.format, raw, parsed.format(&self.format))?;
        Ok(Value::Time(parsed))
    }
}

/// Local date-and-time instants, `dd.MM.yyyy HH:mm:ss` unless configured otherwise.
#[derive(Debug, Clone)]
pub struct DateTimeCodec {
    format: String,
    display: String,
}

impl DateTimeCodec {
    pub fn new() -> Self {
        Self {
            format: DATETIME_PATTERN.to_string(),
            display: "dd.MM.yyyy HH:mm:ss".to_string(),
        }
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        let format = format.into();
        Self {
            display: format.clone(),
            format,
        }
    }
}

impl Default for DateTimeCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCodec for DateTimeCodec {
    fn field_type(&self) -> FieldType {
        FieldType::DateTime
    }

    fn pattern(&self) -> &str {
        &self.display
    }

    fn format(&self, value: &Value) -> Result<String, FormatError> {
        let formatted = value.try_datetime()?.format(&self.format);
        render(&FieldType::DateTime, &self.format, formatted)
    }

    fn parse(&self, raw: &str) -> Result<Value, FormatError> {
        let parsed = NaiveDateTime::parse_from_str(raw, &self.format)
            .map_err(|e| invalid(&FieldType::DateTime, raw, e))?;
        ensure_canonical(&FieldType::DateTime, &self.format, raw, parsed.format(&self.format))?;
        Ok(Value::DateTime(parsed))
    }
}
