use toonfile::{MappingEntries, Value, decode, encode, encode_lines, try_decode};

fn mapping(entries: Vec<(&str, Value)>) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<MappingEntries>(),
    )
}

#[test]
fn round_trip_scalar_mapping() {
    let value = mapping(vec![
        ("name", Value::from("Ada")),
        ("id", Value::from(1i64)),
        ("active", Value::Bool(true)),
        ("score", Value::Number(3.14)),
    ]);
    assert_eq!(decode(&encode(&value)), value);
}

#[test]
fn null_values_drop_their_key() {
    let value = mapping(vec![("a", Value::Null), ("b", Value::from(1i64))]);
    assert_eq!(encode(&value), "b,1");

    let decoded = decode(&encode(&value));
    assert_eq!(decoded.get("a"), None);
    assert_eq!(decoded.get("b"), Some(&Value::Number(1.0)));
}

#[test]
fn empty_sequence_is_erased() {
    let value = mapping(vec![("a", Value::Sequence(Vec::new()))]);
    assert_eq!(encode(&value), "a,");
    // Sequences do not survive a round trip; the empty value slot reads
    // back as an empty mapping.
    assert_eq!(decode("a,"), mapping(vec![("a", mapping(vec![]))]));
}

#[test]
fn all_null_sequence_is_erased() {
    let value = mapping(vec![("a", Value::Sequence(vec![Value::Null, Value::Null]))]);
    assert_eq!(encode(&value), "a,");
}

#[test]
fn sequence_of_scalars_encodes_to_comma_less_lines() {
    let value = mapping(vec![(
        "tags",
        Value::Sequence(vec![Value::from("x"), Value::from("y")]),
    )]);
    assert_eq!(
        encode_lines(&value),
        vec!["tags,".to_string(), "    x".to_string(), "    y".to_string()]
    );
    // The element lines carry no comma, so decoding drops them.
    assert_eq!(
        decode(&encode(&value)),
        mapping(vec![("tags", mapping(vec![]))])
    );
}

#[test]
fn nested_mapping_round_trips_with_key_order() {
    let value = mapping(vec![(
        "a",
        mapping(vec![
            ("b", Value::from(1i64)),
            ("c", Value::from(2i64)),
        ]),
    )]);
    let toon = encode(&value);
    assert_eq!(toon, "a,\n  b,1\n  c,2");
    assert_eq!(decode(&toon), value);
}

#[test]
fn deeply_nested_mappings_round_trip() {
    let value = mapping(vec![(
        "a",
        mapping(vec![
            ("b", mapping(vec![("c", mapping(vec![("d", Value::from(4i64))]))])),
            ("e", Value::from("edge")),
        ]),
    )]);
    assert_eq!(decode(&encode(&value)), value);
}

#[test]
fn empty_nested_mapping_round_trips() {
    let value = mapping(vec![("a", mapping(vec![])), ("b", Value::from(1i64))]);
    assert_eq!(encode(&value), "a,\nb,1");
    assert_eq!(decode(&encode(&value)), value);
}

#[test]
fn literals_decode_case_insensitively() {
    for text in ["true", "TRUE", "True"] {
        assert_eq!(decode(&format!("k,{text}")).get("k"), Some(&Value::Bool(true)));
    }
    for text in ["false", "FALSE", "False"] {
        assert_eq!(
            decode(&format!("k,{text}")).get("k"),
            Some(&Value::Bool(false))
        );
    }
    for text in ["null", "NULL", "Null"] {
        assert_eq!(decode(&format!("k,{text}")).get("k"), Some(&Value::Null));
    }
}

#[test]
fn numeric_coercion_requires_a_full_parse() {
    assert_eq!(decode("k,42").get("k"), Some(&Value::Number(42.0)));
    assert_eq!(decode("k,3.14").get("k"), Some(&Value::Number(3.14)));
    assert_eq!(decode("k,-2.5e3").get("k"), Some(&Value::Number(-2500.0)));
    assert_eq!(
        decode("k,42abc").get("k"),
        Some(&Value::String("42abc".to_string()))
    );
}

#[test]
fn comma_less_lines_are_skipped_silently() {
    let decoded = decode("a,1\nthis line has no comma\nb,2");
    assert_eq!(
        decoded,
        mapping(vec![("a", Value::Number(1.0)), ("b", Value::Number(2.0))])
    );
}

#[test]
fn duplicate_keys_keep_last_value_in_place() {
    assert_eq!(
        decode("a,1\nb,2\na,3"),
        mapping(vec![("a", Value::Number(3.0)), ("b", Value::Number(2.0))])
    );
}

#[test]
fn blank_lines_never_close_a_block() {
    let decoded = decode("a,\n  b,1\n\n   \n  c,2\nd,3");
    assert_eq!(
        decoded,
        mapping(vec![
            (
                "a",
                mapping(vec![("b", Value::Number(1.0)), ("c", Value::Number(2.0))])
            ),
            ("d", Value::Number(3.0)),
        ])
    );
}

#[test]
fn over_indented_children_still_attach_to_their_parent() {
    let decoded = decode("a,\n      b,1\nc,2");
    assert_eq!(
        decoded,
        mapping(vec![
            ("a", mapping(vec![("b", Value::Number(1.0))])),
            ("c", Value::Number(2.0)),
        ])
    );
}

#[test]
fn value_text_splits_at_the_first_comma() {
    // A comma inside the value is preserved: the key never contains one.
    let value = mapping(vec![("k", Value::from("a,b"))]);
    assert_eq!(encode(&value), "k,a,b");
    assert_eq!(decode("k,a,b"), value);
}

#[test]
fn comma_in_a_key_is_not_round_trip_safe() {
    // Known format limitation: no quoting exists, so the first comma always
    // ends the key.
    let value = mapping(vec![("a,b", Value::from("x"))]);
    assert_eq!(
        decode(&encode(&value)),
        mapping(vec![("a", Value::from("b,x"))])
    );
}

#[test]
fn decode_always_returns_a_mapping() {
    assert_eq!(decode(""), mapping(vec![]));
    assert_eq!(decode("\n\n"), mapping(vec![]));
    assert_eq!(decode("just words"), mapping(vec![]));
    assert!(try_decode("x,1").is_ok());
}

#[test]
fn scalars_encode_to_their_canonical_text() {
    assert_eq!(encode(&Value::Null), "");
    assert_eq!(encode(&Value::Bool(true)), "true");
    assert_eq!(encode(&Value::Bool(false)), "false");
    assert_eq!(encode(&Value::Number(42.0)), "42");
    assert_eq!(encode(&Value::Number(0.0)), "0");
    assert_eq!(encode(&Value::from("verbatim, unquoted")), "verbatim, unquoted");
}

#[test]
fn padded_value_text_is_trimmed() {
    assert_eq!(
        decode("k,   spaced out   "),
        mapping(vec![("k", Value::from("spaced out"))])
    );
}

#[test]
fn encode_nested_document_shape() {
    let value = mapping(vec![
        ("name", Value::from("Ada")),
        (
            "meta",
            mapping(vec![("id", Value::from(1i64)), ("active", Value::Bool(true))]),
        ),
    ]);
    insta::assert_snapshot!(encode(&value), @r"
    name,Ada
    meta,
      id,1
      active,true
    ");
}
