//! Ordered sequence of values.
//!
//! [`Array`] owns its elements exclusively and keeps them in insertion order.
//! Indexed access comes in two flavors: [`Array::at`] reports a missing index
//! as [`Error::LookupFailure`], while [`Array::get`] returns an `Option`.
//!
//! ## Examples
//!
//! ```rust
//! use yujson::{Array, Value};
//!
//! let mut array = Array::new();
//! array.push(Value::from(1));
//! array.push(Value::from("two"));
//!
//! array.set(0, Value::from(true)).unwrap();
//! assert_eq!(array.at(0).unwrap(), &Value::Bool(true));
//! assert!(array.at(5).is_err());
//! ```

use crate::{Error, Result, Value};
use std::slice;
use std::vec;

/// An ordered, growable array of JSON values.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Array(Vec<Value>);

impl Array {
    /// Creates an empty `Array`.
    #[must_use]
    pub fn new() -> Self {
        Array(Vec::new())
    }

    /// Creates an empty `Array` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    /// Appends a value to the end.
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Removes and returns the last value.
    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LookupFailure`] if `index` is not below the current length;
    /// `set` never grows the array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::{Array, Value};
    ///
    /// let mut array: Array = vec![Value::from(1)].into();
    /// let old = array.set(0, Value::from(2)).unwrap();
    /// assert_eq!(old, Value::from(1));
    /// assert!(array.set(1, Value::Null).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LookupFailure`] if `index` is out of bounds.
    pub fn at(&self, index: usize) -> Result<&Value> {
        self.0
            .get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.0.len()))
    }

    /// Mutable variant of [`Array::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.0.len();
        self.0
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, len))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    /// Removes the element at `index`, shifting later elements down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LookupFailure`] if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index < self.0.len() {
            Ok(self.0.remove(index))
        } else {
            Err(Error::index_out_of_bounds(index, self.0.len()))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(values)
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        array.0
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl Extend<Value> for Array {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Array {
        vec![Value::from(1), Value::from("two"), Value::Null].into()
    }

    #[test]
    fn test_push_preserves_order() {
        let mut array = Array::new();
        assert!(array.is_empty());
        array.push(Value::from(3));
        array.push(Value::from(1));
        array.push(Value::from(2));
        let ints: Vec<_> = array.iter().filter_map(Value::as_i64).collect();
        assert_eq!(ints, vec![3, 1, 2]);
    }

    #[test]
    fn test_set_within_bounds() {
        let mut array = sample();
        let old = array.set(1, Value::from(false)).unwrap();
        assert_eq!(old, Value::from("two"));
        assert_eq!(array.at(1).unwrap(), &Value::Bool(false));
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn test_set_out_of_bounds_is_lookup_failure() {
        let mut array = sample();
        let err = array.set(3, Value::Null).unwrap_err();
        assert!(matches!(err, Error::LookupFailure { .. }));
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn test_at_and_get() {
        let array = sample();
        assert_eq!(array.at(0).unwrap(), &Value::from(1));
        assert!(matches!(array.at(10), Err(Error::LookupFailure { .. })));
        assert_eq!(array.get(2), Some(&Value::Null));
        assert_eq!(array.get(3), None);
    }

    #[test]
    fn test_at_mut_replaces_in_place() {
        let mut array = sample();
        *array.at_mut(2).unwrap() = Value::from("filled");
        assert_eq!(array.get(2).and_then(Value::as_str), Some("filled"));
        assert!(array.at_mut(3).is_err());
    }

    #[test]
    fn test_remove_and_pop() {
        let mut array = sample();
        assert_eq!(array.remove(0).unwrap(), Value::from(1));
        assert!(array.remove(5).is_err());
        assert_eq!(array.pop(), Some(Value::Null));
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut array: Array = (1..=3).map(Value::from).collect();
        array.extend(vec![Value::from(4)]);
        assert_eq!(array.len(), 4);
        let back: Vec<Value> = array.into();
        assert_eq!(back[3], Value::from(4));
    }
}
