use lenient_json::{json, parse, quote, Error, JsonArray, JsonObject, JsonStringer, JsonValue};

#[test]
fn test_empty_object_round_trip() {
    let object: JsonObject = "{}".parse().unwrap();
    assert_eq!(object.len(), 0);
    assert_eq!(object.to_string(), "{}");
}

#[test]
fn test_flat_object_accessors() {
    let object: JsonObject =
        "{\"int\":1,\"double\":1.1,\"bool\":true,\"string\":\"string\"}"
            .parse()
            .unwrap();

    assert_eq!(object.opt_i32("int", 0), 1);
    assert_eq!(object.opt_f64("double", 0.0), 1.1);
    assert!(object.opt_bool("bool", false));
    assert_eq!(object.opt_string("string", ""), "string");

    assert_eq!(object.get_i32("int").unwrap(), 1);
    assert_eq!(object.get_f64("double").unwrap(), 1.1);
    assert!(object.get_bool("bool").unwrap());
    assert_eq!(object.get_string("string").unwrap(), "string");
}

#[test]
fn test_opt_never_fails() {
    let object: JsonObject = "{\"s\": \"text\", \"nil\": null}".parse().unwrap();

    // absent key
    assert_eq!(object.opt_i32("missing", 7), 7);
    // wrong type
    assert_eq!(object.opt_i32("s", 7), 7);
    assert!(!object.opt_bool("s", false));
    // explicit null
    assert_eq!(object.opt_f64("nil", 2.5), 2.5);
    assert_eq!(object.opt_string("nil", "fallback"), "fallback");

    let array: JsonArray = "[\"text\"]".parse().unwrap();
    assert_eq!(array.opt_i64(0, -1), -1);
    assert_eq!(array.opt_i64(100, -1), -1);
}

#[test]
fn test_array_remove_shifts() {
    let array: JsonArray =
        "[{\"int\":1,\"name\":\"first\"},{\"int\":2,\"name\":\"second\"}]"
            .parse()
            .unwrap();
    let mut array = array;

    let removed = array.remove(0).unwrap();
    assert_eq!(removed.as_object().unwrap().opt_i32("int", 0), 1);

    assert_eq!(array.len(), 1);
    let remaining = array.get_object(0).unwrap();
    assert_eq!(remaining.opt_i32("int", 0), 2);
    assert_eq!(remaining.opt_string("name", ""), "second");

    let expected: JsonArray = "[{\"int\":2,\"name\":\"second\"}]".parse().unwrap();
    assert_eq!(array, expected);
}

#[test]
fn test_index_assignment_pads() {
    let mut array = JsonArray::new();
    array.push(1).unwrap();
    array.put(4, "last").unwrap();

    assert_eq!(array.len(), 5);
    assert_eq!(array.opt(1), None);
    assert_eq!(array.opt(3), None);
    assert!(array.is_null(2));
    assert_eq!(array.get_string(4).unwrap(), "last");
    // vacant slots serialize as nulls
    assert_eq!(array.to_string(), "[1,null,null,null,\"last\"]");
}

#[test]
fn test_two_null_entries_from_bare_separator() {
    let array: JsonArray = "[,]".parse().unwrap();
    assert_eq!(array.len(), 2);
    assert!(array.is_null(0));
    assert!(array.is_null(1));
    assert_eq!(array.to_string(), "[null,null]");
}

#[test]
fn test_non_finite_rejected_at_every_insertion_point() {
    let mut object = JsonObject::new();
    assert!(matches!(
        object.put("d", f64::NAN),
        Err(Error::InvalidNumber { .. })
    ));
    assert!(object.put("d", f64::INFINITY).is_err());
    assert!(object.accumulate("d", f64::NAN).is_err());

    let mut array = JsonArray::new();
    assert!(array.push(f64::NEG_INFINITY).is_err());
    assert!(array.put(2, f64::NAN).is_err());

    let mut stringer = JsonStringer::new();
    stringer.array().unwrap();
    assert!(stringer.value(f64::NAN).is_err());
}

#[test]
fn test_null_and_absent_are_independent_states() {
    let mut object = JsonObject::new();
    object.put("nil", JsonValue::Null).unwrap();

    assert!(object.has("nil"));
    assert!(object.is_null("nil"));
    assert!(!object.has("gone"));
    assert!(object.is_null("gone"));

    // host-language absence removes; the null variant stays
    object.put_opt("nil", None::<i32>).unwrap();
    assert!(!object.has("nil"));
    object.put("nil", JsonValue::Null).unwrap();
    assert_eq!(object.to_string(), "{\"nil\":null}");
}

#[test]
fn test_stringer_scope_discipline() {
    let mut stringer = JsonStringer::new();
    assert!(matches!(stringer.value(1), Err(Error::Nesting { .. })));

    let mut stringer = JsonStringer::new();
    assert!(stringer.end_array().is_err());

    let mut stringer = JsonStringer::new();
    stringer.object().unwrap();
    assert!(stringer.value(1).is_err()); // key required first
    assert!(stringer.end_array().is_err());

    // balanced sequences always succeed
    let mut stringer = JsonStringer::new();
    stringer
        .object()
        .unwrap()
        .key("rows")
        .unwrap()
        .array()
        .unwrap()
        .value(1)
        .unwrap()
        .value(JsonValue::Null)
        .unwrap()
        .end_array()
        .unwrap()
        .end_object()
        .unwrap();
    assert_eq!(
        stringer.finish().unwrap(),
        "{\"rows\":[1,null]}"
    );
}

#[test]
fn test_nested_values_write_themselves() {
    let tree = json!({"outer": {"inner": [1, {"deep": true}]}});
    let mut stringer = JsonStringer::new();
    stringer.array().unwrap().value(tree.clone()).unwrap().end_array().unwrap();
    assert_eq!(
        stringer.finish().unwrap(),
        "[{\"outer\":{\"inner\":[1,{\"deep\":true}]}}]"
    );
}

#[test]
fn test_pretty_printing_shape() {
    let object: JsonObject = "{\"a\":1,\"b\":[true,null],\"empty\":{}}".parse().unwrap();
    assert_eq!(
        object.to_string_pretty(2).unwrap(),
        "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ],\n  \"empty\": {}\n}"
    );
    // width 0 is compact
    assert_eq!(
        object.to_string_pretty(0).unwrap(),
        "{\"a\":1,\"b\":[true,null],\"empty\":{}}"
    );
}

#[test]
fn test_negative_zero_serialization() {
    let mut array = JsonArray::new();
    array.push(-0.0).unwrap();
    assert_eq!(array.to_string(), "[-0]");
}

#[test]
fn test_integral_doubles_render_as_integers() {
    let mut array = JsonArray::new();
    array.push(2.0).unwrap();
    array.push(2.5).unwrap();
    array.push(30000000000.0).unwrap();
    assert_eq!(array.to_string(), "[2,2.5,30000000000]");
}

#[test]
fn test_join() {
    let array: JsonArray = "[true, 1, 'two']".parse().unwrap();
    assert_eq!(array.join("; ").unwrap(), "true; 1; \"two\"");
    assert_eq!(JsonArray::new().join(",").unwrap(), "");
}

#[test]
fn test_quote() {
    assert_eq!(quote("plain"), "\"plain\"");
    assert_eq!(quote("with \"quotes\" and \\"), "\"with \\\"quotes\\\" and \\\\\"");
    assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
    assert_eq!(quote("a/b"), "\"a\\/b\"");
    assert_eq!(quote("\u{0007}"), "\"\\u0007\"");
}

#[test]
fn test_accumulate_three_states() {
    let mut object = JsonObject::new();
    object.accumulate("k", "one").unwrap();
    assert_eq!(object.get_string("k").unwrap(), "one");

    object.accumulate("k", "two").unwrap();
    object.accumulate("k", "three").unwrap();
    assert_eq!(
        object.to_string(),
        "{\"k\":[\"one\",\"two\",\"three\"]}"
    );
}

#[test]
fn test_duplicate_keys_last_wins() {
    let object: JsonObject = "{\"k\": 1, \"k\": 2, \"k\": 3}".parse().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object.get_i32("k").unwrap(), 3);
}

#[test]
fn test_string_coercions() {
    let object: JsonObject =
        "{\"n\": \"12\", \"d\": \"2.5\", \"t\": \"True\", \"big\": \"8589934592\"}"
            .parse()
            .unwrap();
    assert_eq!(object.get_i32("n").unwrap(), 12);
    assert_eq!(object.get_f64("d").unwrap(), 2.5);
    assert!(object.get_bool("t").unwrap());
    assert_eq!(object.get_i64("big").unwrap(), 8589934592);

    // long coercion never retries a failed integer parse as a double
    let object: JsonObject = "{\"d\": \"2.5\"}".parse().unwrap();
    assert!(matches!(
        object.get_i64("d"),
        Err(Error::TypeMismatch { .. })
    ));
    assert_eq!(object.opt_i64("d", 0), 0);
}

#[test]
fn test_numbers_render_as_strings() {
    let object: JsonObject = "{\"n\": 12, \"d\": 1.5, \"b\": false}".parse().unwrap();
    assert_eq!(object.get_string("n").unwrap(), "12");
    assert_eq!(object.get_string("d").unwrap(), "1.5");
    assert_eq!(object.get_string("b").unwrap(), "false");
}

#[test]
fn test_syntax_error_reporting() {
    let err = parse("{\"a\": }").unwrap_err();
    match err {
        Error::Syntax { offset, input, .. } => {
            assert_eq!(input, "{\"a\": }");
            assert!(offset > 0);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }

    assert!(parse("").is_err());
    assert!(parse("   ").is_err());
    assert!(parse("[1, 2").is_err());
    assert!(parse("{\"a\" 1}").is_err());
}

#[test]
fn test_round_trip_equality() {
    let text = "{\"ints\":[1,2147483648],\"nested\":{\"ok\":true,\"nil\":null},\"s\":\"\\\"escaped\\\"\"}";
    let tree = parse(text).unwrap();
    let rendered = tree.to_string();
    assert_eq!(parse(&rendered).unwrap(), tree);
}

#[test]
fn test_serde_embedding() {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Envelope {
        kind: String,
        payload: JsonValue,
    }

    let envelope = Envelope {
        kind: "event".to_string(),
        payload: json!({"id": 9, "tags": ["a", "b"]}),
    };

    let text = serde_json::to_string(&envelope).unwrap();
    let back: Envelope = serde_json::from_str(&text).unwrap();
    assert_eq!(envelope, back);
}

#[test]
fn test_serde_json_value_round_trip() {
    let tree = parse("{\"n\": 1, \"list\": [2.5, null, \"x\"]}").unwrap();
    let text = serde_json::to_string(&tree).unwrap();
    let back: JsonValue = serde_json::from_str(&text).unwrap();
    assert_eq!(back, tree);
}
