//! Text output and serde serialization into [`Value`].
//!
//! This module has two halves:
//!
//! - [`Printer`] walks a [`Value`] tree depth-first and emits JSON text, either
//!   compact or pretty-printed according to [`PrintOptions`].
//! - [`ValueSerializer`] is a [`serde::Serializer`] that builds a [`Value`]
//!   from any `Serialize` type. [`crate::to_string`] combines the two.
//!
//! ## Output format
//!
//! Compact output keeps `", "` between siblings and no space after `:`.
//! Pretty output puts every element on its own line, indented by
//! [`PrintOptions::indent`] spaces per nesting level:
//!
//! ```rust
//! use yujson::{parse, print};
//!
//! let value = parse(r#"{"a": {}, "b": [1, 2]}"#).unwrap();
//! assert_eq!(print(&value, false), r#"{"a":{}, "b":[1, 2]}"#);
//! assert_eq!(
//!     print(&value, true),
//!     "{\n    \"a\": {}, \n    \"b\": [\n        1, \n        2\n    ]\n}"
//! );
//! ```

use crate::{Array, Error, Object, PrintOptions, Result, Value};
use serde::{ser, Serialize};

/// Emits JSON text for a [`Value`] tree.
///
/// Indentation is derived from an explicit depth counter threaded through the
/// recursion.
pub struct Printer<'a> {
    output: String,
    options: &'a PrintOptions,
    depth: usize,
}

impl<'a> Printer<'a> {
    pub fn new(options: &'a PrintOptions) -> Self {
        Printer {
            output: String::with_capacity(128),
            options,
            depth: 0,
        }
    }

    /// Prints `value` and returns the text.
    #[must_use]
    pub fn print(mut self, value: &Value) -> String {
        self.write_value(value);
        self.output
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(true) => self.output.push_str("true"),
            Value::Bool(false) => self.output.push_str("false"),
            Value::Integer(i) => self.output.push_str(&i.to_string()),
            #[cfg(feature = "float")]
            Value::Float(f) => self.output.push_str(&format_float(*f)),
            Value::String(s) => write_quoted(&mut self.output, s),
            Value::Array(arr) => self.write_array(arr),
            Value::Object(obj) => self.write_object(obj),
        }
    }

    fn write_array(&mut self, array: &Array) {
        if array.is_empty() {
            self.output.push_str("[]");
            return;
        }

        self.output.push('[');
        self.depth += 1;
        for (i, element) in array.iter().enumerate() {
            if i > 0 {
                self.write_separator();
            }
            self.write_line_start();
            self.write_value(element);
        }
        self.depth -= 1;
        self.write_line_start();
        self.output.push(']');
    }

    fn write_object(&mut self, object: &Object) {
        if object.is_empty() {
            self.output.push_str("{}");
            return;
        }

        self.output.push('{');
        self.depth += 1;
        for (i, (key, value)) in object.iter().enumerate() {
            if i > 0 {
                self.write_separator();
            }
            self.write_line_start();
            write_quoted(&mut self.output, key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.write_value(value);
        }
        self.depth -= 1;
        self.write_line_start();
        self.output.push('}');
    }

    // Both modes separate siblings with ", "; pretty mode then breaks the line.
    fn write_separator(&mut self) {
        self.output.push_str(", ");
    }

    fn write_line_start(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            let width = self.depth * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }
}

/// Returns `s` as a quoted, escaped JSON string literal.
///
/// # Examples
///
/// ```rust
/// use yujson::print_string;
///
/// assert_eq!(print_string("a\"b"), r#""a\"b""#);
/// assert_eq!(print_string("tab\there"), r#""tab\there""#);
/// assert_eq!(print_string("π"), "\"π\"");
/// ```
#[must_use]
pub fn print_string(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    write_quoted(&mut output, s);
    output
}

fn write_quoted(output: &mut String, s: &str) {
    output.push('"');
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        let escape = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '/' => "\\/",
            '\u{0008}' => "\\b",
            '\u{000C}' => "\\f",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            c if (c as u32) < 0x20 => "",
            _ => continue,
        };
        output.push_str(&s[start..i]);
        if escape.is_empty() {
            output.push_str(&format!("\\u{:04x}", ch as u32));
        } else {
            output.push_str(escape);
        }
        start = i + ch.len_utf8();
    }
    output.push_str(&s[start..]);
    output.push('"');
}

/// Formats a float so that it re-parses as a float.
///
/// Uses the shortest representation that round-trips, always containing a
/// `.` or an exponent. Non-finite values have no JSON form and print as `null`.
#[cfg(feature = "float")]
#[must_use]
pub fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let mut text = format!("{:?}", f);
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}

/// A serializer producing a [`Value`] tree.
///
/// Enum variants carrying data are externally tagged: `{"Variant": payload}`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use yujson::{to_value, Value};
///
/// #[derive(Serialize)]
/// enum Shape {
///     Circle { r: i32 },
///     Empty,
/// }
///
/// let value = to_value(&Shape::Circle { r: 2 }).unwrap();
/// assert_eq!(value["Circle"]["r"], Value::from(2));
/// assert_eq!(to_value(&Shape::Empty).unwrap(), Value::from("Empty"));
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    array: Array,
}

pub struct SerializeTupleVariant {
    name: String,
    array: Array,
}

pub struct SerializeMap {
    object: Object,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    object: Object,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Integer(i)),
            #[cfg(feature = "float")]
            Err(_) => Ok(Value::Float(v as f64)),
            #[cfg(not(feature = "float"))]
            Err(_) => Err(Error::custom(format!("integer {} out of i64 range", v))),
        }
    }

    #[cfg(feature = "float")]
    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    #[cfg(feature = "float")]
    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    #[cfg(not(feature = "float"))]
    fn serialize_f32(self, v: f32) -> Result<Value> {
        Err(Error::custom(format!("floating point value {} is not supported", v)))
    }

    #[cfg(not(feature = "float"))]
    fn serialize_f64(self, v: f64) -> Result<Value> {
        Err(Error::custom(format!("floating point value {} is not supported", v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.iter().map(|&b| Value::from(b)).collect())
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut object = Object::new();
        object.set(variant, to_value(value)?);
        Ok(Value::Object(object))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            array: Array::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            array: Array::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            object: Object::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            object: Object::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.array.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.array))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.array.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut object = Object::new();
        object.set(self.name, Value::Array(self.array));
        Ok(Value::Object(object))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "object keys must be strings, found {}",
                    other.kind()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.object.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.object))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.object.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.object))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.object.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut object = Object::new();
        object.set(self.name, Value::Object(self.object));
        Ok(Value::Object(object))
    }
}

/// Converts any `Serialize` type into a [`Value`].
///
/// # Errors
///
/// Fails for map keys that are not strings, integers or booleans, and for
/// values a `Serialize` impl rejects itself.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
