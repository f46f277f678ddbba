//! Recursive-descent parser building a [`Value`] tree from tokens.
//!
//! The parser pulls tokens from a [`TokenStream`] with one token of lookahead.
//! Nesting is handled by recursion, guarded by [`ParseOptions::max_depth`].
//! Any lexical or syntax error aborts the whole parse; no partial tree is
//! ever returned.

use crate::lexer::{Position, Token, TokenKind, TokenStream};
use crate::{Array, Error, Object, ParseOptions, Result, Value};

/// Parses JSON text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use yujson::parser::Parser;
/// use yujson::Value;
///
/// let mut parser = Parser::new(r#"{"a": [1, true]}"#);
/// let value = parser.parse_document().unwrap();
/// assert_eq!(value["a"][1], Value::Bool(true));
/// ```
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: &ParseOptions) -> Self {
        Parser {
            tokens: TokenStream::new(input),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Parses one complete document: a single value followed by end of input.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntax or recursion-limit error. Content after
    /// the value is a syntax error.
    pub fn parse_document(&mut self) -> Result<Value> {
        let result = self.parse_value().and_then(|value| {
            let token = self.tokens.next_token()?;
            match token.kind {
                TokenKind::EndOfInput => Ok(value),
                _ => Err(unexpected(&token, "end of input")),
            }
        });
        if let Err(err) = &result {
            log::debug!("parse aborted: {}", err);
        }
        result
    }

    /// Parses the next value, leaving any following tokens unconsumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the next token cannot start a value.
    pub fn parse_value(&mut self) -> Result<Value> {
        let token = self.tokens.next_token()?;
        match token.kind {
            TokenKind::Null => Ok(Value::Null),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Integer(ref text) => parse_integer(text, token.pos),
            TokenKind::Float(ref text) => parse_float(text, token.pos),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::LeftBracket => {
                self.enter(token.pos)?;
                let array = self.parse_array();
                self.depth -= 1;
                array.map(Value::Array)
            }
            TokenKind::LeftBrace => {
                self.enter(token.pos)?;
                let object = self.parse_object();
                self.depth -= 1;
                object.map(Value::Object)
            }
            _ => Err(unexpected(&token, "a value")),
        }
    }

    /// Parses array elements after the opening `[` has been consumed.
    fn parse_array(&mut self) -> Result<Array> {
        let mut array = Array::new();
        if self.tokens.expect(&TokenKind::RightBracket)? {
            return Ok(array);
        }

        array.push(self.parse_value()?);
        while self.tokens.expect(&TokenKind::Comma)? {
            array.push(self.parse_value()?);
        }

        let token = self.tokens.next_token()?;
        match token.kind {
            TokenKind::RightBracket => Ok(array),
            _ => Err(unexpected(&token, "',' or ']'")),
        }
    }

    /// Parses object members after the opening `{` has been consumed.
    fn parse_object(&mut self) -> Result<Object> {
        let mut object = Object::new();
        let token = self.tokens.next_token()?;
        if token.kind == TokenKind::RightBrace {
            return Ok(object);
        }

        let key = expect_key(token)?;
        self.parse_member(&mut object, key)?;
        while self.tokens.expect(&TokenKind::Comma)? {
            let key = expect_key(self.tokens.next_token()?)?;
            self.parse_member(&mut object, key)?;
        }

        let token = self.tokens.next_token()?;
        match token.kind {
            TokenKind::RightBrace => Ok(object),
            _ => Err(unexpected(&token, "',' or '}'")),
        }
    }

    fn parse_member(&mut self, object: &mut Object, key: String) -> Result<()> {
        let token = self.tokens.next_token()?;
        if token.kind != TokenKind::Colon {
            return Err(unexpected(&token, "':'"));
        }
        let value = self.parse_value()?;
        // Later duplicates win.
        object.set(key, value);
        Ok(())
    }

    fn enter(&mut self, pos: Position) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::recursion_limit(pos.line, pos.col, self.max_depth));
        }
        self.depth += 1;
        log::trace!("entering container at {} (depth {})", pos, self.depth);
        Ok(())
    }
}

fn expect_key(token: Token) -> Result<String> {
    match token.kind {
        TokenKind::String(key) => Ok(key),
        _ => Err(unexpected(&token, "string key")),
    }
}

fn unexpected(token: &Token, expected: &str) -> Error {
    Error::syntax(
        token.pos.line,
        token.pos.col,
        &format!("expected {}, found {}", expected, token.kind.describe()),
    )
}

fn parse_integer(text: &str, pos: Position) -> Result<Value> {
    text.parse::<i64>().map(Value::Integer).map_err(|_| {
        Error::lexical(
            pos.line,
            pos.col,
            &format!("integer {} out of range", text),
        )
    })
}

#[cfg(feature = "float")]
fn parse_float(text: &str, pos: Position) -> Result<Value> {
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(Error::lexical(
            pos.line,
            pos.col,
            &format!("float {} out of range", text),
        )),
    }
}

// Float tokens are rejected by the lexer without the `float` feature.
#[cfg(not(feature = "float"))]
fn parse_float(text: &str, pos: Position) -> Result<Value> {
    Err(Error::lexical(
        pos.line,
        pos.col,
        &format!("float {} is not supported", text),
    ))
}
