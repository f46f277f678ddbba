//! # yujson
//!
//! A small, self-contained JSON engine: a tokenizer, a recursive-descent
//! parser, a tagged value tree and a printer that turns the tree back into text.
//!
//! ## Key Features
//!
//! - **Closed value model**: [`Value`] is an enum with exhaustive matching; no
//!   unchecked downcasts
//! - **Explicit errors**: every fallible operation returns [`Result`], with
//!   line/column positions for rejected text
//! - **Bounded recursion**: nesting depth is capped by [`ParseOptions`]
//! - **Serde bridge**: any `Serialize`/`Deserialize` type converts to and from
//!   [`Value`] and text
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use yujson::{parse, print, Value};
//!
//! let value = parse(r#"{"qvq":["233",123,"emm",{"qaq":"sb","emmm":true}]}"#).unwrap();
//!
//! let items = value["qvq"].array().unwrap();
//! assert_eq!(items.len(), 4);
//! assert_eq!(value["qvq"][3]["qaq"], Value::from("sb"));
//!
//! // Compact output keeps ", " between siblings and re-parses to an equal tree
//! let text = print(&value, false);
//! assert!(text.starts_with(r#"{"qvq":["233", 123, "emm", {"#));
//! assert_eq!(parse(&text).unwrap(), value);
//! ```
//!
//! ### Typed Data
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use yujson::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string() };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, r#"{"id":123, "name":"Alice"}"#);
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Fail-soft Documents
//!
//! [`parse`] reports why text was rejected. [`Document`] instead swallows the
//! error and leaves an invalid document that prints as `""`:
//!
//! ```rust
//! use yujson::{parse, Document, Error};
//!
//! assert!(matches!(parse("[1, 2,]"), Err(Error::Syntax { .. })));
//!
//! let doc = Document::parse("[1, 2,]");
//! assert!(!doc.is_valid());
//! assert_eq!(doc.print(false), "");
//! ```
//!
//! ## Cargo Features
//!
//! - `float` (default): enables [`Value::Float`]. Without it, number literals
//!   with a fraction or exponent are rejected.
//! - `preserve_order`: objects keep insertion order instead of sorting keys.
//!
//! ## Logging
//!
//! The parser reports through the [`log`](https://docs.rs/log) facade:
//! container entry at `trace`, aborted parses at `debug`. No logger is
//! installed by this crate.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse, inspect and print a document
//! - **`dynamic_values.rs`** - build and mutate trees with `yujson!`
//!
//! Run any example with: `cargo run --example <name>`

pub mod array;
pub mod de;
pub mod document;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod object;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use array::Array;
pub use de::from_value;
pub use document::Document;
pub use error::{Error, Result};
pub use object::Object;
pub use options::{ParseOptions, PrintOptions};
pub use parser::Parser;
pub use ser::{print_string, to_value, Printer, ValueSerializer};
pub use value::{Value, ValueKind};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses one JSON document.
///
/// The whole input must be a single value, optionally surrounded by whitespace.
/// Nesting deeper than [`options::DEFAULT_MAX_DEPTH`] is rejected; use
/// [`parse_with_options`] with [`ParseOptions::unlimited`] to read such text.
///
/// # Examples
///
/// ```rust
/// use yujson::{parse, Value};
///
/// assert_eq!(parse(" [1, 2] ").unwrap()[1], Value::from(2));
/// assert!(parse("[1] [2]").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Lexical`] or [`Error::Syntax`] with the position of the
/// offending token, or [`Error::RecursionLimit`] for input nested deeper than
/// the default limit.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses one JSON document with custom limits.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    Parser::with_options(text, options).parse_document()
}

/// Parses one JSON document from bytes.
///
/// # Errors
///
/// Invalid UTF-8 is reported as [`Error::Lexical`] at the first bad byte;
/// otherwise see [`parse`].
pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = 1 + valid.iter().filter(|&&b| b == b'\n').count();
        let line_start = valid
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        // Valid prefix, so this never fails.
        let col = 1 + std::str::from_utf8(&valid[line_start..]).map_or(0, |s| s.chars().count());
        Error::lexical(line, col, "invalid UTF-8")
    })?;
    parse(text)
}

/// Prints `value` as compact or pretty JSON text.
///
/// The output parses back to an equal tree. A tree nested deeper than
/// [`options::DEFAULT_MAX_DEPTH`] still prints, but reading it back needs
/// [`ParseOptions::unlimited`] or a higher [`ParseOptions::with_max_depth`].
///
/// # Examples
///
/// ```rust
/// use yujson::{print, yujson};
///
/// let value = yujson!({"a": [1, 2]});
/// assert_eq!(print(&value, false), r#"{"a":[1, 2]}"#);
/// assert_eq!(print(&value, true), "{\n    \"a\": [\n        1, \n        2\n    ]\n}");
/// ```
#[must_use]
pub fn print(value: &Value, pretty: bool) -> String {
    print_with_options(value, &PrintOptions::new().with_pretty(pretty))
}

#[must_use]
pub fn print_with_options(value: &Value, options: &PrintOptions) -> String {
    Printer::new(options).print(value)
}

/// Prints `value` into a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(mut writer: W, value: &Value, options: &PrintOptions) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(print_with_options(value, options).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Serializes any `T: Serialize` to compact JSON text.
///
/// # Examples
///
/// ```rust
/// use yujson::to_string;
///
/// assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1, 2, 3]");
/// ```
///
/// # Errors
///
/// Returns an error if `T`'s `Serialize` impl fails or produces a map with
/// non-string keys.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(print(&to_value(value)?, false))
}

/// Serializes any `T: Serialize` to pretty-printed JSON text.
///
/// # Errors
///
/// See [`to_string`].
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(print(&to_value(value)?, true))
}

/// Deserializes an instance of `T` from JSON text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use yujson::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a parse error for malformed text, or a deserialization error if
/// the document's shape does not match `T`.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}

/// Deserializes an instance of `T` from bytes of JSON text.
///
/// # Errors
///
/// See [`parse_slice`] and [`from_str`].
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_slice(v)?)
}

/// Deserializes an instance of `T` from an I/O stream of JSON text.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use yujson::{from_reader, Value};
///
/// let value: Value = from_reader(Cursor::new(b"[true]")).unwrap();
/// assert_eq!(value[0], Value::Bool(true));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails; otherwise see [`from_slice`].
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}
