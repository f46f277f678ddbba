//! Map of string keys to values.
//!
//! [`Object`] owns its values exclusively and keeps keys unique: setting an
//! existing key replaces the previous value.
//!
//! ## Key order
//!
//! By default entries are stored in a [`BTreeMap`](std::collections::BTreeMap),
//! so iteration and printing visit keys in lexicographic order regardless of
//! how the object was built. With the `preserve_order` feature the storage is
//! an [`IndexMap`](indexmap::IndexMap) and keys keep their insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use yujson::{Object, Value};
//!
//! let mut object = Object::new();
//! object.set("name", Value::from("Alice"));
//! object.set("age", Value::from(30));
//!
//! assert_eq!(object.len(), 2);
//! assert_eq!(object.get("name").unwrap().as_str(), Some("Alice"));
//! assert!(object.get("email").is_err());
//! assert_eq!(object.find("email"), None);
//! ```

use crate::{Error, Result, Value};

#[cfg(not(feature = "preserve_order"))]
use std::collections::{btree_map as entries, BTreeMap as Entries};

#[cfg(feature = "preserve_order")]
use indexmap::{map as entries, IndexMap as Entries};

pub type Iter<'a> = entries::Iter<'a, String, Value>;
pub type IterMut<'a> = entries::IterMut<'a, String, Value>;
pub type Keys<'a> = entries::Keys<'a, String, Value>;
pub type Values<'a> = entries::Values<'a, String, Value>;
pub type IntoIter = entries::IntoIter<String, Value>;

/// A JSON object: unique string keys mapped to owned values.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Object(Entries<String, Value>);

impl Object {
    /// Creates an empty `Object`.
    #[must_use]
    pub fn new() -> Self {
        Object(Entries::new())
    }

    /// Inserts or replaces the value for `key`.
    ///
    /// Returns the previous value if the key was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::{Object, Value};
    ///
    /// let mut object = Object::new();
    /// assert!(object.set("key", Value::from(42)).is_none());
    /// assert_eq!(object.set("key", Value::from(43)), Some(Value::from(42)));
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LookupFailure`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| Error::missing_key(key))
    }

    /// Mutable variant of [`Object::get`].
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.0.get_mut(key).ok_or_else(|| Error::missing_key(key))
    }

    /// Returns the value for `key`, or `None` if absent.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        #[cfg(not(feature = "preserve_order"))]
        return self.0.remove(key);
        #[cfg(feature = "preserve_order")]
        return self.0.shift_remove(key);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> Keys<'_> {
        self.0.keys()
    }

    pub fn values(&self) -> Values<'_> {
        self.0.values()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.0.iter_mut()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Object(iter.into_iter().collect())
    }
}

impl Extend<(String, Value)> for Object {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
