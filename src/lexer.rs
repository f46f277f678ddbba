//! Tokenizer for JSON text.
//!
//! The [`Lexer`] turns a `&str` into a stream of [`Token`]s on demand. It owns
//! no tree state; the parser pulls tokens through a [`TokenStream`], which adds
//! one token of lookahead on top of the lexer's iterator.
//!
//! ## Token rules
//!
//! - ASCII whitespace (space, tab, CR, LF) between tokens is skipped
//! - `{ } [ ] , :` map one-to-one to structural tokens
//! - `null`, `true`, `false` must match exactly
//! - numbers follow `-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?` and are classified
//!   as [`TokenKind::Float`] when a fraction or exponent is present
//! - strings are decoded while scanning; `\uXXXX` escapes (including surrogate
//!   pairs) are re-encoded as UTF-8
//! - end of input yields [`TokenKind::EndOfInput`], not an error
//!
//! ## Examples
//!
//! ```rust
//! use yujson::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize(r#"{"a": [1, -2]}"#).unwrap();
//! let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::LeftBrace,
//!         TokenKind::String("a".to_string()),
//!         TokenKind::Colon,
//!         TokenKind::LeftBracket,
//!         TokenKind::Integer("1".to_string()),
//!         TokenKind::Comma,
//!         TokenKind::Integer("-2".to_string()),
//!         TokenKind::RightBracket,
//!         TokenKind::RightBrace,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

use crate::{Error, Result};
use std::fmt;
use std::iter::Peekable;

/// A line/column location in the input, both 1-based.
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn start() -> Self {
        Position { line: 1, col: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The kind of a lexical token, with its decoded payload for literals.
///
/// Number payloads hold the literal text exactly as written; string payloads
/// hold the unescaped contents.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    EndOfInput,
    Null,
    True,
    False,
    Integer(String),
    Float(String),
    String(String),
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
}

impl TokenKind {
    /// Short human-readable description used in error messages.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Null => "`null`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Integer(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
        }
    }
}

/// A token together with the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

/// Produces tokens from JSON text.
///
/// `Lexer` is an [`Iterator`] over `Result<Token>`. It yields
/// [`TokenKind::EndOfInput`] exactly once at the end, or stops after the first
/// error.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    col: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            offset: 0,
            line: 1,
            col: 1,
            finished: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lexical`] for malformed literals, unterminated strings,
    /// invalid escapes and unexpected characters.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let pos = self.cursor();

        let byte = match self.peek_byte() {
            Some(b) => b,
            None => {
                return Ok(Token {
                    kind: TokenKind::EndOfInput,
                    pos,
                })
            }
        };

        let kind = match byte {
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b'[' => self.single(TokenKind::LeftBracket),
            b']' => self.single(TokenKind::RightBracket),
            b',' => self.single(TokenKind::Comma),
            b':' => self.single(TokenKind::Colon),
            b'n' => self.lex_keyword("null", TokenKind::Null)?,
            b't' => self.lex_keyword("true", TokenKind::True)?,
            b'f' => self.lex_keyword("false", TokenKind::False)?,
            b'-' | b'0'..=b'9' => self.lex_number(pos)?,
            b'"' => {
                self.bump();
                TokenKind::String(self.lex_string(pos)?)
            }
            _ => {
                let ch = self.input[self.offset..].chars().next().unwrap_or('\u{FFFD}');
                return Err(Error::lexical(
                    pos.line,
                    pos.col,
                    &format!("unexpected character {:?}", ch),
                ));
            }
        };

        Ok(Token { kind, pos })
    }

    /// Current position of the cursor.
    #[must_use]
    pub fn cursor(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.offset += 1;
        if byte == b'\n' {
            self.line += 1;
            self.col = 1;
        } else if byte & 0xC0 != 0x80 {
            // continuation bytes belong to the previous character
            self.col += 1;
        }
        Some(byte)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.bump();
        }
    }

    fn error_here(&self, msg: &str) -> Error {
        Error::lexical(self.line, self.col, msg)
    }

    fn lex_keyword(&mut self, word: &'static str, kind: TokenKind) -> Result<TokenKind> {
        if self.input[self.offset..].starts_with(word) {
            for _ in 0..word.len() {
                self.bump();
            }
            Ok(kind)
        } else {
            Err(self.error_here(&format!("invalid literal, expected `{}`", word)))
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.bump();
            count += 1;
        }
        count
    }

    fn lex_number(&mut self, start: Position) -> Result<TokenKind> {
        let begin = self.offset;
        let mut is_float = false;

        if self.peek_byte() == Some(b'-') {
            self.bump();
        }
        if self.eat_digits() == 0 {
            return Err(self.error_here("expected digit in number"));
        }

        if self.peek_byte() == Some(b'.') {
            self.bump();
            is_float = true;
            if self.eat_digits() == 0 {
                return Err(self.error_here("expected digit after decimal point"));
            }
        }

        if let Some(b'e' | b'E') = self.peek_byte() {
            self.bump();
            is_float = true;
            if let Some(b'+' | b'-') = self.peek_byte() {
                self.bump();
            }
            if self.eat_digits() == 0 {
                return Err(self.error_here("expected digit in exponent"));
            }
        }

        let text = self.input[begin..self.offset].to_string();
        if is_float {
            float_token(text, start)
        } else {
            Ok(TokenKind::Integer(text))
        }
    }

    /// Scans string contents; the opening quote has already been consumed.
    fn lex_string(&mut self, start: Position) -> Result<String> {
        let mut out = String::new();
        let mut run_start = self.offset;

        loop {
            match self.peek_byte() {
                None => {
                    return Err(Error::lexical(start.line, start.col, "unterminated string"));
                }
                Some(b'"') => {
                    out.push_str(&self.input[run_start..self.offset]);
                    self.bump();
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run_start..self.offset]);
                    let escape_pos = self.cursor();
                    self.bump();
                    self.lex_escape(&mut out, escape_pos, start)?;
                    run_start = self.offset;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn lex_escape(&mut self, out: &mut String, at: Position, start: Position) -> Result<()> {
        let byte = match self.bump() {
            Some(b) => b,
            None => return Err(Error::lexical(start.line, start.col, "unterminated string")),
        };

        match byte {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => out.push(self.lex_unicode_escape(at)?),
            other => {
                return Err(Error::lexical(
                    at.line,
                    at.col,
                    &format!("invalid escape sequence '\\{}'", other as char),
                ))
            }
        }
        Ok(())
    }

    /// Decodes the digits of a `\u` escape, pairing surrogates.
    fn lex_unicode_escape(&mut self, at: Position) -> Result<char> {
        let high = self.read_hex4()?;

        let code_point = match high {
            0xD800..=0xDBFF => {
                if !self.input[self.offset..].starts_with("\\u") {
                    return Err(Error::lexical(
                        at.line,
                        at.col,
                        "high surrogate not followed by a low surrogate escape",
                    ));
                }
                self.bump();
                self.bump();
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Error::lexical(
                        at.line,
                        at.col,
                        &format!("invalid low surrogate \\u{:04X}", low),
                    ));
                }
                0x10000 + (high - 0xD800) * 0x400 + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(Error::lexical(
                    at.line,
                    at.col,
                    &format!("unpaired low surrogate \\u{:04X}", high),
                ));
            }
            _ => high,
        };

        char::from_u32(code_point)
            .ok_or_else(|| Error::lexical(at.line, at.col, "invalid unicode code point"))
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self
                .peek_byte()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or_else(|| self.error_here("expected 4 hex digits in unicode escape"))?;
            self.bump();
            value = value * 16 + digit;
        }
        Ok(value)
    }
}

#[cfg(feature = "float")]
fn float_token(text: String, _start: Position) -> Result<TokenKind> {
    Ok(TokenKind::Float(text))
}

#[cfg(not(feature = "float"))]
fn float_token(_text: String, start: Position) -> Result<TokenKind> {
    Err(Error::lexical(
        start.line,
        start.col,
        "floating point numbers are not supported",
    ))
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if matches!(
            result,
            Err(_)
                | Ok(Token {
                    kind: TokenKind::EndOfInput,
                    ..
                })
        ) {
            self.finished = true;
        }
        Some(result)
    }
}

/// Tokenizes the whole input, including the trailing [`TokenKind::EndOfInput`].
///
/// # Errors
///
/// Returns the first lexical error encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).collect()
}

/// A token stream with one token of lookahead.
///
/// Wraps the lexer in a [`Peekable`] so at most one token is buffered ahead of
/// the consumption point. Once the lexer is exhausted the stream keeps
/// answering with `EndOfInput`.
pub struct TokenStream<'a> {
    tokens: Peekable<Lexer<'a>>,
    end: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(input: &'a str) -> Self {
        TokenStream {
            tokens: Lexer::new(input).peekable(),
            end: Token {
                kind: TokenKind::EndOfInput,
                pos: Position::start(),
            },
        }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        match self.tokens.next() {
            Some(Ok(token)) => {
                self.end.pos = token.pos;
                Ok(token)
            }
            Some(Err(err)) => Err(err),
            None => Ok(self.end.clone()),
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token> {
        match self.tokens.peek() {
            Some(Ok(token)) => Ok(token),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(&self.end),
        }
    }

    /// Consumes the next token if it has the given kind.
    ///
    /// Returns `Ok(false)` and leaves the stream untouched otherwise.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<bool> {
        if self.peek_token()?.kind == *kind {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
