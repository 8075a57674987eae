use recordtext_core::{
    FieldDef, FieldDefs, FieldType, FormatRules, UnknownTypePolicy, format_field_defs,
};

fn meeting_like_fields() -> FieldDefs {
    vec![
        FieldDef::new("title", FieldType::Text),
        FieldDef::new("usersLimit", FieldType::I32),
        FieldDef::new("startDate", FieldType::Date),
        FieldDef::new("startTimeFrom", FieldType::Time),
        FieldDef::new("registrationAvailableUntil", FieldType::DateTime),
    ]
    .into()
}

#[test]
fn builtin_types_show_their_canonical_pattern() -> Result<(), std::fmt::Error> {
    let text = format_field_defs(meeting_like_fields(), &FormatRules::default())?;
    let expected = "\
title: { type: text, pattern: verbatim }
usersLimit: { type: i32, pattern: decimal }
startDate: { type: date, pattern: dd.MM.yyyy }
startTimeFrom: { type: time, pattern: HH:mm:ss }
registrationAvailableUntil: { type: datetime, pattern: dd.MM.yyyy HH:mm:ss }
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn types_without_codec_show_a_dash() -> Result<(), std::fmt::Error> {
    let fields = vec![FieldDef::new("id", FieldType::from("uuid"))];
    let rules = FormatRules::builder()
        .with_default_codecs()
        .unknown_types(UnknownTypePolicy::Passthrough)
        .build();

    let text = format_field_defs(&fields, &rules)?;
    assert_eq!(text, "id: { type: uuid, pattern: - }\n");
    Ok(())
}

#[test]
fn empty_field_list_renders_nothing() -> Result<(), std::fmt::Error> {
    let text = format_field_defs(FieldDefs::default(), &FormatRules::default())?;
    assert!(text.is_empty());
    Ok(())
}
