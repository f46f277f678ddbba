//! Error types for parsing, printing and inspecting JSON values.
//!
//! Every fallible operation in this crate returns [`Result<T>`]; nothing panics
//! on malformed input or on a lookup that misses.
//!
//! ## Error Categories
//!
//! - **Lexical Errors**: malformed literals, unterminated strings, bad escapes,
//!   invalid surrogate pairs
//! - **Syntax Errors**: unexpected tokens, missing delimiters, non-string keys,
//!   trailing content
//! - **Type Mismatches**: a typed accessor was called on the wrong variant
//! - **Lookup Failures**: an array index or object key is not present
//!
//! Lexical and syntax errors carry the line and column where the problem was
//! detected.
//!
//! ## Examples
//!
//! ```rust
//! use yujson::{parse, Error};
//!
//! let err = parse("[1, 2,]").unwrap_err();
//! assert!(matches!(err, Error::Syntax { .. }));
//! assert_eq!(err.position(), Some((1, 7)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed input at the character level
    #[error("Lexical error at line {line}, column {col}: {msg}")]
    Lexical { line: usize, col: usize, msg: String },

    /// Well-formed tokens in an order the grammar does not allow
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Accessor called on a value of another kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Index or key not present
    #[error("Lookup failure: {msg}")]
    LookupFailure { msg: String },

    /// Nesting deeper than the configured limit
    #[error("Recursion limit of {limit} exceeded at line {line}, column {col}")]
    RecursionLimit {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, mostly raised through serde
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a lexical error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::Error;
    ///
    /// let err = Error::lexical(3, 14, "unterminated string");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn lexical(line: usize, col: usize, msg: &str) -> Self {
        Error::Lexical {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a syntax error at the given position.
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yujson::Error;
    ///
    /// let err = Error::type_mismatch("array", "string");
    /// assert!(err.to_string().contains("expected array"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a lookup failure for an absent object key.
    pub fn missing_key(key: &str) -> Self {
        Error::LookupFailure {
            msg: format!("key {:?} not found", key),
        }
    }

    /// Creates a lookup failure for an index past the end of an array.
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::LookupFailure {
            msg: format!("index {} out of bounds for array of length {}", index, len),
        }
    }

    pub fn recursion_limit(line: usize, col: usize, limit: usize) -> Self {
        Error::RecursionLimit { line, col, limit }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `(line, column)` for errors raised while reading text.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Lexical { line, col, .. }
            | Error::Syntax { line, col, .. }
            | Error::RecursionLimit { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }

    /// Returns `true` for lexical and syntax errors, i.e. the input text was rejected.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Lexical { .. } | Error::Syntax { .. } | Error::RecursionLimit { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only_for_text_errors() {
        assert_eq!(Error::lexical(2, 5, "bad").position(), Some((2, 5)));
        assert_eq!(Error::syntax(1, 1, "bad").position(), Some((1, 1)));
        assert_eq!(Error::type_mismatch("array", "null").position(), None);
        assert_eq!(Error::missing_key("a").position(), None);
    }

    #[test]
    fn test_lookup_messages() {
        let err = Error::index_out_of_bounds(5, 2);
        assert!(err.to_string().contains("index 5"));
        assert!(!err.is_parse_error());

        let err = Error::missing_key("name");
        assert!(err.to_string().contains("\"name\""));
    }
}
