//! A lexical token from a source text, along with streams for said token

use crate::spanned::{Span, Spanned};
use num_bigint::BigUint;
use std::collections::VecDeque;
use std::fmt::{Debug, Display, Formatter};
use std::iter;

/// A lexical token from a source text
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    span: Span,
    kind: TokenKind,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind) -> Self {
        Self { span, kind }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Takes the kind out of this token
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.span.line()
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.span.column()
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.kind, f)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind.payload() {
            Some(payload) => write!(
                f,
                "Token({}, {payload}, line={}, col={})",
                self.kind,
                self.line(),
                self.column()
            ),
            None => write!(
                f,
                "Token({}, line={}, col={})",
                self.kind,
                self.line(),
                self.column()
            ),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind for this token
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum TokenKind {
    /// A non-negative integer literal of unbounded width
    #[strum(serialize = "INT")]
    Int(BigUint),
    /// the `pow` keyword
    #[strum(serialize = "POW")]
    Pow,
    #[strum(serialize = "LPAREN")]
    LParen,
    #[strum(serialize = "RPAREN")]
    RParen,
    #[strum(serialize = "COMMA")]
    Comma,
    #[strum(serialize = "PLUS")]
    Plus,
    #[strum(serialize = "MULT")]
    Mult,
    /// EOF, will only appear at the end of a token sequence
    #[strum(serialize = "EOF")]
    Eof,
    /// Text the scanner could not recognize
    #[strum(serialize = "ERROR")]
    Error(String),
}

impl TokenKind {
    /// The upper-case name of this kind, such as `INT` or `LPAREN`
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Gets the payload carried by this kind, if any
    pub fn payload(&self) -> Option<String> {
        match self {
            TokenKind::Int(value) => Some(value.to_string()),
            TokenKind::Error(text) => Some(format!("{text:?}")),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A stream of tokens
#[derive(Debug, Clone)]
pub struct TokenStream(VecDeque<Token>);

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        TokenStream::from_iter(iter::empty())
    }

    /// Peeks the next token without consuming it
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.0.front()
    }

    /// The number of tokens remaining
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(value: Vec<Token>) -> Self {
        Self(VecDeque::from(value))
    }
}
