use serde::{Deserialize, Serialize};
use yujson::{
    from_reader, from_slice, from_str, from_value, parse, print, print_with_options, to_string,
    to_string_pretty, to_value, to_writer, yujson, Document, Error, PrintOptions, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    note: Option<String>,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

#[test]
fn test_simple_struct() {
    let user = alice();

    let text = to_string(&user).unwrap();
    println!("User JSON: {}", text);

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[cfg(feature = "float")]
#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: alice(),
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET/002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        note: None,
    };

    let text = to_string_pretty(&order).unwrap();
    println!("Order JSON:\n{}", text);
    assert!(text.contains("\"sku\": \"GADGET\\/002\""));

    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_primitives() {
    assert_roundtrip(&42i32);
    assert_roundtrip(&-7i64);
    assert_roundtrip(&true);
    assert_roundtrip(&false);
    assert_roundtrip(&"hello world".to_string());
    assert_roundtrip(&vec![1, 2, 3, 4, 5]);
    assert_roundtrip(&Some(3u8));
    assert_roundtrip(&None::<u8>);
    assert_roundtrip(&'x');
}

#[cfg(feature = "float")]
#[test]
fn test_floats() {
    assert_roundtrip(&0.0f64);
    assert_roundtrip(&4.25f64);
    assert_roundtrip(&-5.75f64);
    assert_roundtrip(&1.0e-7f64);
    assert_roundtrip(&1.5e300f64);
    assert_roundtrip(&3.5f32);
}

#[test]
fn test_special_strings() {
    let strings = [
        "",
        "with \"quotes\"",
        "back\\slash",
        "a/b",
        "line\nbreak\ttab\rreturn",
        "\u{8}\u{c}\u{1}\u{1f}",
        "unicode: héllo wörld 🌍",
    ];
    for s in strings {
        assert_roundtrip(&s.to_string());
    }
}

#[test]
fn test_empty_collections() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(to_string(&empty).unwrap(), "[]");
    assert_roundtrip(&empty);

    let empty_map: std::collections::BTreeMap<String, i32> = Default::default();
    assert_eq!(to_string(&empty_map).unwrap(), "{}");
    assert_roundtrip(&empty_map);
}

#[test]
fn test_to_value_and_back() {
    let value = to_value(&alice()).unwrap();
    assert_eq!(value["name"], Value::from("Alice"));
    assert_eq!(value["tags"][1], Value::from("developer"));

    let user: User = from_value(value).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn test_deserialize_error_reports_type() {
    let err = from_str::<User>(r#"{"id": "x", "name": "n", "active": true, "tags": []}"#)
        .unwrap_err();
    assert!(!err.is_parse_error());

    let err = from_str::<User>("{\"id\": 1,\n \"name\": }").unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.position(), Some((2, 10)));
}

#[test]
fn test_reader_writer() {
    let mut buffer = Vec::new();
    let value = yujson!({"k": [1, null]});
    to_writer(&mut buffer, &value, &PrintOptions::pretty().with_indent(2)).unwrap();
    assert_eq!(
        String::from_utf8(buffer.clone()).unwrap(),
        "{\n  \"k\": [\n    1, \n    null\n  ]\n}"
    );

    let back: Value = from_reader(buffer.as_slice()).unwrap();
    assert_eq!(back, value);

    let from_bytes: Value = from_slice(b"{\"k\": [1, null]}").unwrap();
    assert_eq!(from_bytes, value);
}

#[test]
fn test_mutation_then_print() {
    let mut value = parse(r#"{"list": [1, 2, 3], "flag": false}"#).unwrap();

    {
        let object = value.object_mut().unwrap();
        object.set("flag", Value::from(true));
        object.remove("list");
        object.set("name", Value::from("yu"));
    }
    value
        .object_mut()
        .unwrap()
        .set("list", yujson!([{"deep": "x"}]));

    let reparsed = parse(&print(&value, false)).unwrap();
    assert_eq!(reparsed, value);
    assert_eq!(reparsed["list"][0]["deep"], Value::from("x"));
    assert_eq!(reparsed["flag"], Value::Bool(true));
}

#[test]
fn test_kind_replacement_in_parent_slot() {
    let mut value = parse(r#"[1, "two", [3]]"#).unwrap();
    let array = value.array_mut().unwrap();
    let old = array.set(2, Value::from("three")).unwrap();
    assert!(old.is_array());
    assert_eq!(print(&value, false), r#"[1, "two", "three"]"#);
}

#[test]
fn test_document_fail_soft() {
    let doc = Document::parse(r#"{"a": [1, 2}"#);
    assert!(!doc.is_valid());
    assert_eq!(doc.print(false), "");

    let doc = Document::parse(r#"{"a": [1, 2]}"#);
    assert_eq!(
        doc.print_with_options(&PrintOptions::pretty().with_indent(1)),
        "{\n \"a\": [\n  1, \n  2\n ]\n}"
    );
}

#[test]
fn test_errors_carry_kind_and_position() {
    let cases: [(&str, fn(&Error) -> bool, (usize, usize)); 5] = [
        ("[1, 2,]", |e| matches!(e, Error::Syntax { .. }), (1, 7)),
        ("{\"a\" 1}", |e| matches!(e, Error::Syntax { .. }), (1, 6)),
        ("[tru]", |e| matches!(e, Error::Lexical { .. }), (1, 2)),
        ("\n  \"open", |e| matches!(e, Error::Lexical { .. }), (2, 3)),
        ("[\"\\x\"]", |e| matches!(e, Error::Lexical { .. }), (1, 3)),
    ];
    for (text, is_kind, position) in cases {
        let err = parse(text).unwrap_err();
        assert!(is_kind(&err), "{:?} gave {:?}", text, err);
        assert_eq!(err.position(), Some(position), "{:?} gave {:?}", text, err);
    }
}

#[test]
fn test_display_matches_print() {
    let value = yujson!({"a": [true, null]});
    assert_eq!(value.to_string(), print(&value, false));
    assert_eq!(format!("{:#}", value), print(&value, true));
    assert_eq!(
        print_with_options(&value, &PrintOptions::new()),
        value.to_string()
    );
}

/// Cross-check against serde_json on documents both accept.
#[test]
fn test_agrees_with_serde_json() {
    let documents = [
        r#"{"qvq":["233",123,"emm",{"qaq":"sb","emmm":true}]}"#,
        r#"[null, true, false, 0, -12, "x\"y\\z\/w", [], {}]"#,
        "{\"nested\": {\"deeper\": [[[\"\\u00e9\\ud83c\\udf0d\"]]]}}",
        r#"{"a": 1, "a": 2}"#,
        "  [ 1 ,\n\t2 ]  ",
    ];
    for text in documents {
        let ours: serde_json::Value = from_str(text).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(ours, theirs, "disagreement on {}", text);

        // Our printer's output must also be accepted by serde_json.
        let printed = print(&parse(text).unwrap(), true);
        let reread: serde_json::Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(reread, theirs);
    }
}

#[cfg(feature = "float")]
#[test]
fn test_floats_agree_with_serde_json() {
    for text in ["1.5e10", "-0.25", "3.0", "1E-3", "[1.25, 2e2]"] {
        let ours: serde_json::Value = from_str(text).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(ours, theirs, "disagreement on {}", text);
    }
}

#[test]
fn test_rejects_what_serde_json_rejects() {
    for text in ["[1,]", "{\"a\":1,}", "\"\\ud800\"", "{1:2}", "tru", "[1 2]", "-"] {
        assert!(parse(text).is_err(), "accepted {:?}", text);
        assert!(
            serde_json::from_str::<serde_json::Value>(text).is_err(),
            "serde_json accepted {:?}",
            text
        );
    }
}

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let text = to_string(original).unwrap();
    let deserialized: T = from_str(&text).unwrap();
    assert_eq!(*original, deserialized);
}
