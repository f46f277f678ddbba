//! Configuration options for parsing and printing.
//!
//! - [`ParseOptions`]: limits applied while reading text
//! - [`PrintOptions`]: compact vs. pretty output and the indent unit
//!
//! ## Examples
//!
//! ```rust
//! use yujson::{parse_with_options, print_with_options, ParseOptions, PrintOptions};
//!
//! let value = parse_with_options("[[1], [2]]", &ParseOptions::new().with_max_depth(8)).unwrap();
//!
//! let text = print_with_options(&value, &PrintOptions::pretty().with_indent(2));
//! assert_eq!(text, "[\n  [\n    1\n  ], \n  [\n    2\n  ]\n]");
//! ```

/// Default nesting limit for arrays and objects.
///
/// Printing has no such limit, so deeper trees only re-parse with a raised
/// limit or [`ParseOptions::unlimited`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default number of spaces per pretty-printing level.
pub const DEFAULT_INDENT: usize = 4;

/// Options controlling the parser.
///
/// # Examples
///
/// ```rust
/// use yujson::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let options = ParseOptions::unlimited();
/// assert_eq!(options.max_depth, usize::MAX);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options without a nesting limit; depth is then bounded only by the stack.
    #[must_use]
    pub fn unlimited() -> Self {
        ParseOptions {
            max_depth: usize::MAX,
        }
    }

    /// Sets the maximum nesting depth.
    ///
    /// A depth of 1 allows one level of array or object with scalar children.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Options controlling text output.
///
/// # Examples
///
/// ```rust
/// use yujson::PrintOptions;
///
/// // Compact: `[1, 2]`, `{"a":1}`
/// let options = PrintOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 4-space indentation
/// let options = PrintOptions::pretty();
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            pretty: false,
            indent: DEFAULT_INDENT,
        }
    }
}

impl PrintOptions {
    /// Creates default options (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with one element per line.
    #[must_use]
    pub fn pretty() -> Self {
        PrintOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
