//! Explicit field descriptor lists standing in for runtime reflection.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    error::{RecordError, ValueTypeError},
    schema::{FieldDefs, FieldType},
    value::Value,
};

/// A Rust type that can be stored in a record field.
pub trait FieldValue: Sized {
    /// Type tag used to pick the formatting rule.
    fn field_type() -> FieldType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, ValueTypeError>;
}

impl FieldValue for String {
    fn field_type() -> FieldType {
        FieldType::Text
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(other.type_mismatch("Text")),
        }
    }
}

impl FieldValue for i32 {
    fn field_type() -> FieldType {
        FieldType::I32
    }

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        value.try_i32()
    }
}

impl FieldValue for NaiveDate {
    fn field_type() -> FieldType {
        FieldType::Date
    }

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        value.try_date()
    }
}

impl FieldValue for NaiveTime {
    fn field_type() -> FieldType {
        FieldType::Time
    }

    fn to_value(&self) -> Value {
        Value::Time(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        value.try_time()
    }
}

impl FieldValue for NaiveDateTime {
    fn field_type() -> FieldType {
        FieldType::DateTime
    }

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        value.try_datetime()
    }
}

/// A structured value with a fixed, ordered set of named and typed fields.
///
/// Usually implemented with [`impl_record!`](crate::impl_record). Manual
/// implementations must keep the three methods consistent: `values` and
/// `from_values` use the order of `field_defs`.
pub trait Record: Sized {
    /// Field descriptors in declaration order.
    fn field_defs() -> FieldDefs;

    /// Current value of every field, in declaration order.
    fn values(&self) -> Vec<Value>;

    /// Build a complete instance from one value per field, in declaration order.
    fn from_values(values: Vec<Value>) -> Result<Self, RecordError>;
}

/// Implement [`Record`] for a struct whose fields implement [`FieldValue`].
///
/// Each entry maps the serialized field name to a struct field:
///
/// ```
/// use chrono::NaiveDate;
/// use recordtext_core::{Record, impl_record};
///
/// struct Booking {
///     guest: String,
///     arrival: NaiveDate,
/// }
///
/// impl_record!(Booking {
///     "guest" => guest: String,
///     "arrivalDate" => arrival: NaiveDate,
/// });
///
/// let names: Vec<_> = Booking::field_defs().names().map(str::to_string).collect();
/// assert_eq!(names, ["guest", "arrivalDate"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($record:ident { $($name:literal => $field:ident : $ty:ty),+ $(,)? }) => {
        impl $crate::Record for $record {
            fn field_defs() -> $crate::FieldDefs {
                $crate::FieldDefs::new(::std::vec![
                    $($crate::FieldDef::new($name, <$ty as $crate::FieldValue>::field_type()),)+
                ])
            }

            fn values(&self) -> ::std::vec::Vec<$crate::Value> {
                ::std::vec![$(<$ty as $crate::FieldValue>::to_value(&self.$field),)+]
            }

            fn from_values(
                values: ::std::vec::Vec<$crate::Value>,
            ) -> ::std::result::Result<Self, $crate::RecordError> {
                let expected = [$($name),+].len();
                if values.len() > expected {
                    return ::std::result::Result::Err($crate::RecordError::UnexpectedValues {
                        expected,
                        actual: values.len(),
                    });
                }
                let mut values = values.into_iter();
                ::std::result::Result::Ok(Self {
                    $($field: {
                        let value = values.next().ok_or_else(|| {
                            $crate::RecordError::MissingValue {
                                field: ::std::string::ToString::to_string($name),
                            }
                        })?;
                        <$ty as $crate::FieldValue>::from_value(value).map_err(|source| {
                            $crate::RecordError::ValueType {
                                field: ::std::string::ToString::to_string($name),
                                source,
                            }
                        })?
                    },)+
                })
            }
        }
    };
}
