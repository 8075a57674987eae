mod common;

use common::{EVENT_TEXT, Event, event};
use recordtext::{
    CodecError, RecordCodec, Value,
    core::{
        FieldDef, FieldDefs, FieldType, FormatError, FormatRules, RecordError, UnknownTypePolicy,
    },
    deserialize, parse_field_values,
};

#[test]
fn parses_lines_into_field_value_map() {
    let values = parse_field_values(EVENT_TEXT).unwrap();
    assert_eq!(values.len(), 7);
    assert_eq!(values.get("title"), Some("Test meeting"));
    assert_eq!(values.get("registrationAvailableUntil"), Some("19.08.2023 10:45:30"));
    assert!(!values.contains("title'"));
}

#[test]
fn value_split_happens_on_first_delimiter_only() {
    let values = parse_field_values("'formula'='a'='b'\n").unwrap();
    assert_eq!(values.get("formula"), Some("a'='b"));
}

#[test]
fn blank_lines_and_crlf_are_accepted() {
    let values = parse_field_values("\r\n'a'='1'\r\n   \n'b'=''\n\n").unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values.get("a"), Some("1"));
    assert_eq!(values.get("b"), Some(""));
}

#[test]
fn duplicate_names_keep_the_last_value() {
    let values = parse_field_values("'a'='1'\n'a'='2'\n").unwrap();
    assert_eq!(values.get("a"), Some("2"));
}

#[test]
fn empty_text_yields_empty_map() {
    assert!(parse_field_values("").unwrap().is_empty());
}

#[test]
fn line_without_delimiter_is_parse_error() {
    let text = format!("{EVENT_TEXT}garbage\n");
    let err = deserialize::<Event>(&text).unwrap_err();
    assert!(matches!(err, CodecError::Parse { line: 8, .. }));
}

#[test]
fn line_without_closing_quote_is_parse_error() {
    let err = parse_field_values("'a'='1'\n'b'='2\n").unwrap_err();
    assert!(matches!(err, CodecError::Parse { line: 2, .. }));
    assert_eq!(err.to_string(), "malformed line 2: missing closing quote");
}

#[test]
fn unquoted_name_is_parse_error() {
    let err = parse_field_values("a='1'\n").unwrap_err();
    assert!(matches!(err, CodecError::Parse { line: 1, .. }));
}

#[test]
fn deserializes_a_fully_populated_record() {
    let record: Event = deserialize(EVENT_TEXT).unwrap();
    assert_eq!(record, event());
}

#[test]
fn line_order_does_not_matter() {
    let reversed: String = EVENT_TEXT
        .lines()
        .rev()
        .map(|line| format!("{line}\n"))
        .collect();
    let record: Event = deserialize(&reversed).unwrap();
    assert_eq!(record, event());
}

#[test]
fn undeclared_fields_are_ignored() {
    let text = format!("'organizer'='someone'\n{EVENT_TEXT}");
    let record: Event = deserialize(&text).unwrap();
    assert_eq!(record, event());
}

#[test]
fn missing_declared_field_is_missing_field_error() {
    let text: String = EVENT_TEXT
        .lines()
        .filter(|line| !line.starts_with("'startTimeTo'"))
        .map(|line| format!("{line}\n"))
        .collect();

    let err = deserialize::<Event>(&text).unwrap_err();
    assert!(matches!(err, CodecError::MissingField { ref field } if field == "startTimeTo"));
}

#[test]
fn value_in_wrong_pattern_is_format_error() {
    let text = EVENT_TEXT.replace("'startTimeFrom'='10:00:00'", "'startTimeFrom'='20.08.2023'");

    let err = deserialize::<Event>(&text).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Format {
            ref field,
            source: FormatError::InvalidValue { .. },
        } if field == "startTimeFrom"
    ));
}

#[test]
fn non_numeric_integer_is_format_error() {
    let text = EVENT_TEXT.replace("'usersLimit'='45'", "'usersLimit'='forty-five'");
    let err = deserialize::<Event>(&text).unwrap_err();
    assert!(matches!(err, CodecError::Format { ref field, .. } if field == "usersLimit"));
}

#[test]
fn dynamic_schema_decodes_into_values() {
    let codec = RecordCodec::default();
    let fields: FieldDefs = vec![
        FieldDef::new("usersLimit", FieldType::I32),
        FieldDef::new("title", FieldType::Text),
    ]
    .into();

    let values = codec.deserialize_values(&fields, EVENT_TEXT).unwrap();
    assert_eq!(values, vec![Value::I32(45), Value::text("Test meeting")]);
}

#[test]
fn unknown_types_pass_through_when_configured() {
    let rules = FormatRules::builder()
        .with_default_codecs()
        .unknown_types(UnknownTypePolicy::Passthrough)
        .build();
    let codec = RecordCodec::new(rules);
    let fields: FieldDefs = vec![FieldDef::new("id", FieldType::from("uuid"))].into();

    let values = codec.deserialize_values(&fields, "'id'='0f0e-11'\n").unwrap();
    assert_eq!(values, vec![Value::text("0f0e-11")]);

    let strict = RecordCodec::default();
    assert!(matches!(
        strict.deserialize_values(&fields, "'id'='0f0e-11'\n"),
        Err(CodecError::Format {
            source: FormatError::UnsupportedType { .. },
            ..
        })
    ));
}

#[derive(Debug)]
struct Mislabelled {
    count: i32,
}

impl recordtext::Record for Mislabelled {
    fn field_defs() -> FieldDefs {
        vec![FieldDef::new("count", FieldType::Text)].into()
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::I32(self.count)]
    }

    fn from_values(values: Vec<Value>) -> Result<Self, RecordError> {
        let value = values.into_iter().next().ok_or(RecordError::MissingValue {
            field: "count".to_string(),
        })?;
        let count = value.try_i32().map_err(|source| RecordError::ValueType {
            field: "count".to_string(),
            source,
        })?;
        Ok(Self { count })
    }
}

#[test]
fn record_rejecting_converted_values_is_instantiation_error() {
    let err = deserialize::<Mislabelled>("'count'='3'\n").unwrap_err();
    assert!(matches!(
        err,
        CodecError::Instantiation {
            source: RecordError::ValueType { .. },
            ..
        }
    ));
}
