//! Fail-soft top-level holder.
//!
//! A [`Document`] either holds a root [`Value`] or is invalid. Parsing never
//! returns an error here; malformed input yields an invalid document, and an
//! invalid document prints as the empty string.
//!
//! ```rust
//! use yujson::Document;
//!
//! let doc = Document::parse(r#"{"ok": true}"#);
//! assert!(doc.is_valid());
//! assert_eq!(doc.print(false), r#"{"ok":true}"#);
//!
//! let broken = Document::parse("[1, 2,]");
//! assert!(!broken.is_valid());
//! assert_eq!(broken.print(true), "");
//! ```

use crate::{print_with_options, ParseOptions, PrintOptions, Value};

/// A parsed document, or the invalid state left by a failed parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    root: Option<Value>,
}

impl Document {
    /// Parses `text`, leaving the document invalid on any error.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    #[must_use]
    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Self {
        match crate::parse_with_options(text, options) {
            Ok(value) => Document { root: Some(value) },
            Err(err) => {
                log::debug!("document rejected: {}", err);
                Document { root: None }
            }
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.root.is_some()
    }

    #[must_use]
    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Value> {
        self.root.as_mut()
    }

    /// Replaces the root, making the document valid.
    pub fn set_root(&mut self, value: Value) -> Option<Value> {
        self.root.replace(value)
    }

    #[must_use]
    pub fn into_root(self) -> Option<Value> {
        self.root
    }

    /// Prints the root, or returns `""` for an invalid document.
    #[must_use]
    pub fn print(&self, pretty: bool) -> String {
        self.print_with_options(&PrintOptions::new().with_pretty(pretty))
    }

    #[must_use]
    pub fn print_with_options(&self, options: &PrintOptions) -> String {
        self.root
            .as_ref()
            .map(|value| print_with_options(value, options))
            .unwrap_or_default()
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document { root: Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yujson;

    #[test_log::test]
    fn test_valid_document() {
        let doc = Document::parse(r#"{"qvq":["233",123,"emm",{"qaq":"sb","emmm":true}]}"#);
        assert!(doc.is_valid());
        let root = doc.root().unwrap();
        assert_eq!(root["qvq"][3]["qaq"], Value::from("sb"));
    }

    #[test_log::test]
    fn test_invalid_documents_hold_nothing() {
        for text in ["", "[1, 2,]", "{\"a\" 1}", "nul", "\"open", "[1] 2"] {
            let doc = Document::parse(text);
            assert!(!doc.is_valid(), "{:?} should be rejected", text);
            assert_eq!(doc.root(), None);
            assert_eq!(doc.print(false), "");
            assert_eq!(doc.print(true), "");
        }
    }

    #[test_log::test]
    fn test_depth_limit_leaves_document_invalid() {
        let options = ParseOptions::new().with_max_depth(1);
        assert!(!Document::parse_with_options("[[]]", &options).is_valid());
        assert!(Document::parse_with_options("[]", &options).is_valid());
    }

    #[test]
    fn test_default_is_invalid() {
        let mut doc = Document::default();
        assert!(!doc.is_valid());
        assert_eq!(doc.set_root(yujson!([1])), None);
        assert_eq!(doc.print(false), "[1]");
    }

    #[test]
    fn test_root_mut_and_into_root() {
        let mut doc = Document::from(yujson!({"n": 1}));
        *doc.root_mut().unwrap() = yujson!("replaced");
        assert_eq!(doc.into_root(), Some(Value::from("replaced")));
    }
}
