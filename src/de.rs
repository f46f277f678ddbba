//! Deserialization out of [`Value`] trees.
//!
//! [`Value`] implements [`serde::Deserializer`], so any `Deserialize` type can
//! be read from a parsed tree. [`crate::from_str`] parses text and then
//! deserializes from the resulting tree.
//!
//! ```rust
//! use serde::Deserialize;
//! use yujson::{from_value, yujson};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, tags: Vec<String> }
//!
//! let data: Data = from_value(yujson!({"x": 1, "tags": ["a"]})).unwrap();
//! assert_eq!(data, Data { x: 1, tags: vec!["a".to_string()] });
//! ```
//!
//! Enums follow the external tagging written by [`crate::ser::ValueSerializer`]:
//! unit variants are strings, others are single-entry objects.

use crate::{object, Array, Error, Object, Result, Value};
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::forward_to_deserialize_any;

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Integer(i) => visitor.visit_i64(i),
            #[cfg(feature = "float")]
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visit_array(arr, visitor),
            Value::Object(obj) => visit_object(obj, visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::String(variant) => visitor.visit_enum(EnumDeserializer {
                variant,
                value: None,
            }),
            Value::Object(obj) => {
                let mut entries = obj.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    _ => Err(Error::custom(
                        "expected an object with a single variant key",
                    )),
                }
            }
            other => Err(Error::type_mismatch("string or object", other.kind().as_str())),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

fn visit_array<'de, V>(array: Array, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    let len = array.len();
    let mut seq = SeqDeserializer {
        iter: array.into_iter(),
    };
    let value = visitor.visit_seq(&mut seq)?;
    if seq.iter.len() == 0 {
        Ok(value)
    } else {
        Err(de::Error::invalid_length(len, &"fewer elements in array"))
    }
}

fn visit_object<'de, V>(object: Object, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    let mut map = MapDeserializer {
        iter: object.into_iter(),
        value: None,
    };
    visitor.visit_map(&mut map)
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl<'de> de::SeqAccess<'de> for &mut SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: object::IntoIter,
    value: Option<Value>,
}

impl<'de> de::MapAccess<'de> for &mut MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Value::String(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Value::String(self.variant))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            Some(other) => Err(Error::type_mismatch("unit variant", other.kind().as_str())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(value),
            None => Err(Error::type_mismatch("newtype variant", "unit variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visit_array(arr, visitor),
            Some(other) => Err(Error::type_mismatch("tuple variant", other.kind().as_str())),
            None => Err(Error::type_mismatch("tuple variant", "unit variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visit_object(obj, visitor),
            Some(other) => Err(Error::type_mismatch("struct variant", other.kind().as_str())),
            None => Err(Error::type_mismatch("struct variant", "unit variant")),
        }
    }
}

/// Deserializes an instance of `T` from a [`Value`] tree.
///
/// # Errors
///
/// Returns an error if the tree's shape does not match `T`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yujson;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        email: Option<String>,
        tags: Vec<String>,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    enum Command {
        Stop,
        Jump(i32),
        Move(i32, i32),
        Say { text: String },
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Meters(u16);

    #[test]
    fn test_struct_with_option() {
        let user: User = from_value(yujson!({
            "id": 7,
            "name": "Alice",
            "email": null,
            "tags": ["x", "y"]
        }))
        .unwrap();
        assert_eq!(
            user,
            User {
                id: 7,
                name: "Alice".to_string(),
                email: None,
                tags: vec!["x".to_string(), "y".to_string()],
            }
        );
    }

    #[test]
    fn test_missing_option_field_defaults() {
        let user: User = from_value(yujson!({"id": 1, "name": "B", "tags": []})).unwrap();
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_enums() {
        assert_eq!(from_value::<Command>(yujson!("Stop")).unwrap(), Command::Stop);
        assert_eq!(
            from_value::<Command>(yujson!({"Jump": 3})).unwrap(),
            Command::Jump(3)
        );
        assert_eq!(
            from_value::<Command>(yujson!({"Move": [1, -1]})).unwrap(),
            Command::Move(1, -1)
        );
        assert_eq!(
            from_value::<Command>(yujson!({"Say": {"text": "hi"}})).unwrap(),
            Command::Say {
                text: "hi".to_string()
            }
        );
        assert!(from_value::<Command>(yujson!({"Stop": null, "Jump": 1})).is_err());
        assert!(from_value::<Command>(yujson!(5)).is_err());
    }

    #[test]
    fn test_newtype_and_ranges() {
        assert_eq!(from_value::<Meters>(yujson!(12)).unwrap(), Meters(12));
        assert!(from_value::<Meters>(yujson!(-1)).is_err());
        assert!(from_value::<u8>(yujson!(300)).is_err());
    }

    #[test]
    fn test_maps_and_tuples() {
        let map: BTreeMap<String, i64> = from_value(yujson!({"a": 1, "b": 2})).unwrap();
        assert_eq!(map.get("b"), Some(&2));

        let pair: (String, bool) = from_value(yujson!(["k", true])).unwrap();
        assert_eq!(pair, ("k".to_string(), true));
        assert!(from_value::<(i32, i32)>(yujson!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_value_round_trips_through_itself() {
        let original = yujson!({"a": [1, "two", null, {"b": false}]});
        let back: Value = from_value(original.clone()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_type_errors() {
        assert!(from_value::<String>(yujson!(1)).is_err());
        assert!(from_value::<Vec<i32>>(yujson!({"a": 1})).is_err());
        assert!(from_value::<bool>(Value::Null).is_err());
    }
}
