/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Array elements and object values may be `null`, `true`, `false`, nested
/// arrays and objects, or any expression convertible with `Value::from`.
/// Object keys must be string literals.
///
/// # Examples
///
/// ```rust
/// use yujson::{yujson, Value};
///
/// let offset = -2;
/// let value = yujson!({
///     "name": "Alice",
///     "scores": [10, offset, 7],
///     "admin": false,
///     "manager": null
/// });
///
/// assert_eq!(value["scores"][1], Value::from(-2));
/// assert!(value["manager"].is_null());
/// ```
#[macro_export]
macro_rules! yujson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::Array::new())
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::Array::from(
            $crate::__yujson_internal!(@array [] $($tt)+)
        ))
    };

    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::Object::new();
        $crate::__yujson_internal!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __yujson_internal {
    // Arrays: accumulate finished elements, then emit the vector.
    (@array [$($elems:expr,)*]) => {
        vec![$($elems,)*]
    };

    (@array [$($elems:expr,)*] , $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)*] $($rest)*)
    };

    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::Value::Null,] $($rest)*)
    };

    (@array [$($elems:expr,)*] true $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::Value::Bool(true),] $($rest)*)
    };

    (@array [$($elems:expr,)*] false $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::Value::Bool(false),] $($rest)*)
    };

    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::yujson!([$($array)*]),] $($rest)*)
    };

    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::yujson!({$($map)*}),] $($rest)*)
    };

    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::yujson!($next),] $($rest)*)
    };

    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::__yujson_internal!(@array [$($elems,)* $crate::yujson!($last),])
    };

    // Objects: insert one entry at a time into the named local.
    (@object $object:ident) => {};

    (@object $object:ident , $($rest:tt)*) => {
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : null $($rest:tt)*) => {
        $object.set($key, $crate::Value::Null);
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : true $($rest:tt)*) => {
        $object.set($key, $crate::Value::Bool(true));
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : false $($rest:tt)*) => {
        $object.set($key, $crate::Value::Bool(false));
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : [$($array:tt)*] $($rest:tt)*) => {
        $object.set($key, $crate::yujson!([$($array)*]));
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : {$($map:tt)*} $($rest:tt)*) => {
        $object.set($key, $crate::yujson!({$($map)*}));
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : $value:expr, $($rest:tt)*) => {
        $object.set($key, $crate::yujson!($value));
        $crate::__yujson_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : $value:expr) => {
        $object.set($key, $crate::yujson!($value));
    };
}

#[cfg(test)]
mod tests {
    use crate::{Array, Object, Value};

    #[test]
    fn test_yujson_macro_primitives() {
        assert_eq!(yujson!(null), Value::Null);
        assert_eq!(yujson!(true), Value::Bool(true));
        assert_eq!(yujson!(false), Value::Bool(false));
        assert_eq!(yujson!(42), Value::Integer(42));
        assert_eq!(yujson!(-42), Value::Integer(-42));
        assert_eq!(yujson!("hello"), Value::String("hello".to_string()));
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_yujson_macro_float() {
        assert_eq!(yujson!(3.5), Value::Float(3.5));
        assert_eq!(yujson!([-0.5]), Value::from(vec![Value::Float(-0.5)]));
    }

    #[test]
    fn test_yujson_macro_arrays() {
        assert_eq!(yujson!([]), Value::Array(Array::new()));

        let arr = yujson!([1, -2, null, [true], {}]);
        let items = arr.array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items.at(1).unwrap(), &Value::Integer(-2));
        assert!(items.at(2).unwrap().is_null());
        assert_eq!(items.at(3).unwrap()[0], Value::Bool(true));
        assert!(items.at(4).unwrap().is_object());
    }

    #[test]
    fn test_yujson_macro_objects() {
        assert_eq!(yujson!({}), Value::Object(Object::new()));

        let obj = yujson!({
            "name": "Alice",
            "age": 30,
            "nested": {"inner": [1, 2]},
            "none": null,
        });

        let map = obj.object().unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.find("name"), Some(&Value::from("Alice")));
        assert_eq!(map.find("age"), Some(&Value::Integer(30)));
        assert_eq!(obj["nested"]["inner"][1], Value::Integer(2));
    }

    #[test]
    fn test_yujson_macro_expressions() {
        let name = String::from("bob");
        let count = 3u8;
        let value = yujson!({"name": name, "count": count, "sum": 1 + 2});
        assert_eq!(value["name"], Value::from("bob"));
        assert_eq!(value["count"], Value::Integer(3));
        assert_eq!(value["sum"], Value::Integer(3));
    }
}
