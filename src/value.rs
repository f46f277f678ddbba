//! Dynamic value representation for JSON data.
//!
//! This module provides the [`Value`] enum, a closed tagged tree: every
//! [`Array`] and [`Object`] exclusively owns its children, so a tree has no
//! sharing and no cycles.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, integer, float, string, array or object
//! - [`ValueKind`]: the discriminant alone, used for type checks and error messages
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use yujson::{yujson, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let obj = yujson!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Typed Access
//!
//! `as_*` accessors return `Option`; the kind-named accessors ([`Value::array`],
//! [`Value::object`], [`Value::string`], ...) return [`Error::TypeMismatch`]
//! instead, so lookups chain with `?`:
//!
//! ```rust
//! use yujson::parse;
//!
//! # fn main() -> yujson::Result<()> {
//! let value = parse(r#"{"items": [10, 20, 30]}"#)?;
//! let second = value.object()?.get("items")?.array()?.at(1)?.integer()?;
//! assert_eq!(second, 20);
//!
//! assert!(value.array().is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ### Changing a Value's Kind
//!
//! A value never changes kind in place; replace it in its slot instead:
//!
//! ```rust
//! use yujson::{parse, Value};
//!
//! let mut value = parse(r#"{"slot": 1}"#).unwrap();
//! let slot = value.object_mut().unwrap().get_mut("slot").unwrap();
//! let old = std::mem::replace(slot, Value::from("one"));
//! assert_eq!(old, Value::from(1));
//! ```

use crate::{Array, Error, Object, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// A dynamically-typed JSON value.
///
/// # Examples
///
/// ```rust
/// use yujson::Value;
///
/// let null = Value::Null;
/// let num = Value::Integer(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    #[cfg(feature = "float")]
    Float(f64),
    String(String),
    Array(Array),
    Object(Object),
}

/// The discriminant of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    #[cfg(feature = "float")]
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integer",
            #[cfg(feature = "float")]
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static NULL: Value = Value::Null;

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            #[cfg(feature = "float")]
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> Error {
        Error::type_mismatch(expected.as_str(), self.kind().as_str())
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[cfg(feature = "float")]
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` for integers and floats.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        match self {
            Value::Integer(_) => true,
            #[cfg(feature = "float")]
            Value::Float(_) => true,
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Floats are not converted.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[cfg(feature = "float")]
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the boolean payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a boolean.
    pub fn boolean(&self) -> Result<bool> {
        self.as_bool().ok_or_else(|| self.mismatch(ValueKind::Bool))
    }

    /// Returns the integer payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an integer, including
    /// when it is a float.
    pub fn integer(&self) -> Result<i64> {
        self.as_i64().ok_or_else(|| self.mismatch(ValueKind::Integer))
    }

    /// Returns the float payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a float.
    #[cfg(feature = "float")]
    pub fn float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            _ => Err(self.mismatch(ValueKind::Float)),
        }
    }

    /// Returns the string payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a string.
    pub fn string(&self) -> Result<&str> {
        self.as_str().ok_or_else(|| self.mismatch(ValueKind::String))
    }

    pub fn string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Returns the array payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array.
    pub fn array(&self) -> Result<&Array> {
        self.as_array().ok_or_else(|| self.mismatch(ValueKind::Array))
    }

    pub fn array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Returns the object payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an object.
    pub fn object(&self) -> Result<&Object> {
        self.as_object()
            .ok_or_else(|| self.mismatch(ValueKind::Object))
    }

    pub fn object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Number of elements of an array, entries of an object, or bytes of a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for scalars.
    pub fn len(&self) -> Result<usize> {
        match self {
            Value::Array(arr) => Ok(arr.len()),
            Value::Object(obj) => Ok(obj.len()),
            Value::String(s) => Ok(s.len()),
            other => Err(Error::type_mismatch(
                "array, object or string",
                other.kind().as_str(),
            )),
        }
    }

    /// Looks up `key` if this value is an object.
    ///
    /// Returns `None` for other kinds and for absent keys.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.find(key))
    }

    /// Replaces this value with `Null` and returns the previous value.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Converts to an integer, falling back to `default` when no sensible
    /// conversion exists.
    ///
    /// Floats truncate toward zero, booleans map to 1/0 and strings are parsed
    /// after trimming whitespace. Null, arrays, objects, unparsable strings and
    /// non-finite floats yield `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::Value;
    ///
    /// assert_eq!(Value::from("123").convert_to_int(0), 123);
    /// assert_eq!(Value::from(true).convert_to_int(0), 1);
    /// assert_eq!(Value::from("abc").convert_to_int(-1), -1);
    /// assert_eq!(Value::Null.convert_to_int(7), 7);
    /// ```
    #[must_use]
    pub fn convert_to_int(&self, default: i64) -> i64 {
        match self {
            Value::Integer(i) => *i,
            #[cfg(feature = "float")]
            Value::Float(f) => float_to_int(*f).unwrap_or(default),
            Value::Bool(b) => i64::from(*b),
            Value::String(s) => string_to_int(s.trim()).unwrap_or(default),
            Value::Null | Value::Array(_) | Value::Object(_) => default,
        }
    }

    /// Converts to a float, falling back to `default` when no sensible
    /// conversion exists.
    #[cfg(feature = "float")]
    #[must_use]
    pub fn convert_to_float(&self, default: f64) -> f64 {
        match self {
            Value::Integer(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(default),
            Value::Null | Value::Array(_) | Value::Object(_) => default,
        }
    }

    /// Converts a scalar to its textual form, falling back to `default` for
    /// null, arrays and objects.
    ///
    /// Strings are returned as-is, without quotes or escapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::Value;
    ///
    /// assert_eq!(Value::from(10000).convert_to_string(""), "10000");
    /// assert_eq!(Value::from("raw \"text\"").convert_to_string(""), "raw \"text\"");
    /// assert_eq!(Value::Null.convert_to_string("n/a"), "n/a");
    /// ```
    #[must_use]
    pub fn convert_to_string(&self, default: &str) -> String {
        match self {
            Value::Integer(i) => i.to_string(),
            #[cfg(feature = "float")]
            Value::Float(f) => crate::ser::format_float(*f),
            Value::Bool(b) => b.to_string(),
            Value::String(s) => s.clone(),
            Value::Null | Value::Array(_) | Value::Object(_) => default.to_string(),
        }
    }
}

#[cfg(feature = "float")]
fn float_to_int(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

fn string_to_int(s: &str) -> Option<i64> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    #[cfg(feature = "float")]
    if let Ok(f) = s.parse::<f64>() {
        return float_to_int(f);
    }
    None
}

impl fmt::Display for Value {
    /// Prints compact text; the alternate flag (`{:#}`) pretty-prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = if f.alternate() {
            crate::PrintOptions::pretty()
        } else {
            crate::PrintOptions::new()
        };
        f.write_str(&crate::ser::Printer::new(&options).print(self))
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Looks up an object key; yields `Null` for absent keys and non-objects.
    fn index(&self, key: &str) -> &Value {
        self.find(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Looks up an array element; yields `Null` when out of range or not an array.
    fn index(&self, index: usize) -> &Value {
        self.as_array()
            .and_then(|arr| arr.get(index))
            .unwrap_or(&NULL)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            #[cfg(feature = "float")]
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Integer(i)),
                    #[cfg(feature = "float")]
                    Err(_) => Ok(Value::Float(value as f64)),
                    #[cfg(not(feature = "float"))]
                    Err(_) => Err(E::custom("integer out of i64 range")),
                }
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Value, E> {
                #[cfg(feature = "float")]
                return Ok(Value::Float(value));
                #[cfg(not(feature = "float"))]
                return Err(E::custom(format!(
                    "floating point value {} is not supported",
                    value
                )));
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = Array::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    array.push(elem);
                }
                Ok(Value::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = Object::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    object.set(key, value);
                }
                Ok(Value::Object(object))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting payloads from Value
impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.integer()
    }
}

#[cfg(feature = "float")]
impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.float()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.boolean()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }
}

impl TryFrom<Value> for Array {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(obj),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }
}

// From implementations for creating leaf values from native types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(feature = "float")]
impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

#[cfg(feature = "float")]
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Array::from(value))
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}
