use yujson::{print, yujson, Array, Object, Value};

#[test]
fn test_yujson_macro_null() {
    let value = yujson!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_yujson_macro_booleans() {
    let true_val = yujson!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = yujson!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_yujson_macro_numbers() {
    let int_val = yujson!(42);
    assert_eq!(int_val, Value::Integer(42));

    let negative_val = yujson!(-123);
    assert_eq!(negative_val, Value::Integer(-123));
}

#[cfg(feature = "float")]
#[test]
fn test_yujson_macro_floats() {
    let float_val = yujson!(3.5);
    assert_eq!(float_val, Value::Float(3.5));

    let in_array = yujson!([1.25, -2.5]);
    assert_eq!(in_array[1], Value::Float(-2.5));
}

#[test]
fn test_yujson_macro_strings() {
    let string_val = yujson!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = yujson!("");
    assert_eq!(empty_string, Value::String(String::new()));
}

#[test]
fn test_yujson_macro_arrays() {
    let empty_array = yujson!([]);
    assert_eq!(empty_array, Value::Array(Array::new()));

    let number_array = yujson!([1, 2, 3]);
    assert_eq!(
        number_array,
        Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])
    );

    let mixed_array = yujson!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::from(vec![
            Value::Integer(1),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );

    let trailing = yujson!([1, 2,]);
    assert_eq!(trailing.len().unwrap(), 2);
}

#[test]
fn test_yujson_macro_objects() {
    let empty_object = yujson!({});
    assert_eq!(empty_object, Value::Object(Object::new()));

    let simple_object = yujson!({
        "name": "Alice",
        "age": 30
    });

    let obj = simple_object.object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name").unwrap(), &Value::from("Alice"));
    assert_eq!(obj.get("age").unwrap(), &Value::from(30));
}

#[test]
fn test_yujson_macro_nested() {
    let nested = yujson!({
        "user": {
            "name": "Bob",
            "roles": ["admin", "dev"],
            "manager": null
        },
        "matrix": [[1, 2], [3, 4]],
        "count": -1
    });

    assert_eq!(nested["user"]["roles"][1], Value::from("dev"));
    assert!(nested["user"]["manager"].is_null());
    assert_eq!(nested["matrix"][1][0], Value::from(3));
    assert_eq!(nested["count"], Value::from(-1));
}

#[test]
fn test_yujson_macro_interpolation() {
    let name = "Carol";
    let scores = vec![Value::from(9), Value::from(7)];
    let value = yujson!({"name": name, "scores": scores, "total": 9 + 7});

    assert_eq!(value["name"], Value::from("Carol"));
    assert_eq!(value["scores"].len().unwrap(), 2);
    assert_eq!(value["total"], Value::from(16));
}

#[test]
fn test_yujson_macro_duplicate_keys() {
    let value = yujson!({"k": 1, "k": 2});
    assert_eq!(value.object().unwrap().len(), 1);
    assert_eq!(value["k"], Value::from(2));
}

#[test]
fn test_yujson_macro_prints_like_parsed_text() {
    let built = yujson!({"a": [true, {"b": null}]});
    let parsed = yujson::parse(r#"{"a": [true, {"b": null}]}"#).unwrap();
    assert_eq!(built, parsed);
    assert_eq!(print(&built, false), r#"{"a":[true, {"b":null}]}"#);
}
