//! Typed intermediate representation exchanged between records and the rule table.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ValueTypeError;

/// Value of a single record field.
/// Each variant corresponds to exactly one canonical text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    I32(i32),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn try_text(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::Text(v) => Ok(v),
            _ => Err(self.type_mismatch("Text")),
        }
    }

    pub fn try_i32(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(*v),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_date(&self) -> Result<NaiveDate, ValueTypeError> {
        match self {
            Value::Date(v) => Ok(*v),
            _ => Err(self.type_mismatch("Date")),
        }
    }

    pub fn try_time(&self) -> Result<NaiveTime, ValueTypeError> {
        match self {
            Value::Time(v) => Ok(*v),
            _ => Err(self.type_mismatch("Time")),
        }
    }

    pub fn try_datetime(&self) -> Result<NaiveDateTime, ValueTypeError> {
        match self {
            Value::DateTime(v) => Ok(*v),
            _ => Err(self.type_mismatch("DateTime")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::I32(_) => "I32",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
            Value::DateTime(_) => "DateTime",
        }
    }
}
