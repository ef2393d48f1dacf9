//! Responsible with converting source text into a token sequence

use crate::lexer::token_parsing::{parse_insignificant, parse_token};
use powexpr_tokens::spanned::{Span, Spanned};
use powexpr_tokens::token::{Token, TokenKind};
use powexpr_tokens::{Diagnostic, SpannedError, Stage, StageError};
use thiserror::Error;
use tracing::{debug, trace};

mod token_parsing;

/// A lexical error, along with where it occurred
pub type LexicalError = SpannedError<LexErrorKind>;

/// [LexicalError] kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unknown character {0:?}")]
    UnknownCharacter(char),
    /// A `p` that does not start the `pow` keyword
    #[error("unknown identifier {0:?}")]
    UnknownIdentifier(char),
    #[error("malformed integer literal '{0}'")]
    MalformedInteger(String),
}

impl StageError for LexErrorKind {
    const STAGE: Stage = Stage::Lexical;
}

/// Converts source text into tokens.
///
/// The lexer never stops early. Every character it can't recognize becomes one
/// [TokenKind::Error] token and one [LexicalError], and the last token produced is always
/// [TokenKind::Eof].
///
/// # Examples
/// ```
/// # use powexpr_parsing::lexer::Lexer;
/// # use powexpr_tokens::token::TokenKind;
/// let scanned = Lexer::new("pow(2, 3)").scan();
/// assert!(scanned.is_ok());
/// assert_eq!(scanned.tokens.len(), 7);
/// assert_eq!(scanned.tokens.last().unwrap().kind(), &TokenKind::Eof);
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    rest: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    errors: Vec<LexicalError>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer
    pub fn new(src: &'a str) -> Self {
        Self {
            rest: src,
            offset: 0,
            line: 1,
            column: 1,
            errors: vec![],
            finished: false,
        }
    }

    /// Scans the whole source
    pub fn scan(mut self) -> Scanned {
        let tokens = self.by_ref().collect::<Vec<_>>();
        debug!(
            "scanned {} tokens with {} errors",
            tokens.len(),
            self.errors.len()
        );
        Scanned {
            tokens,
            errors: self.errors,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        if let Ok((_, blank)) = parse_insignificant(self.rest) {
            self.advance(blank.len());
        }
        if self.rest.is_empty() {
            self.finished = true;
            return Some(Token::new(self.span(0), TokenKind::Eof));
        }

        let token = match parse_token(self.rest) {
            Ok((rest, kind)) => {
                let span = self.span(self.rest.len() - rest.len());
                if let TokenKind::Error(digits) = &kind {
                    self.error(LexErrorKind::MalformedInteger(digits.clone()), span);
                }
                Token::new(span, kind)
            }
            Err(_) => {
                let c = self.rest.chars().next()?;
                let span = self.span(c.len_utf8());
                let kind = match c {
                    'p' => LexErrorKind::UnknownIdentifier(c),
                    c => LexErrorKind::UnknownCharacter(c),
                };
                self.error(kind, span);
                Token::new(span, TokenKind::Error(c.to_string()))
            }
        };
        self.advance(token.span().len());
        trace!("lexed {token}");
        Some(token)
    }

    fn span(&self, len: usize) -> Span {
        Span::new(self.offset, len, self.line, self.column)
    }

    fn error(&mut self, kind: LexErrorKind, span: Span) {
        trace!("lexical error at {}:{}: {kind}", span.line(), span.column());
        self.errors.push(LexicalError::new(kind, span));
    }

    /// Moves past `len` bytes, keeping the line and column up to date
    fn advance(&mut self, len: usize) {
        let (consumed, rest) = self.rest.split_at(len);
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += len;
        self.rest = rest;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// The output of the lexer: every token, and every error found while producing them
#[derive(Debug, Clone)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
}

impl Scanned {
    /// Whether no lexical errors were found
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors of this scan as diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(LexicalError::to_diagnostic).collect()
    }

    /// Gets the tokens only if no lexical errors were found
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexicalError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}
