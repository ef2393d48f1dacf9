//! Predictive parser that creates the AST from a token sequence

use powexpr_ast::Expr;
use powexpr_tokens::spanned::{Span, Spanned};
use powexpr_tokens::token::{Token, TokenKind, TokenStream};
use powexpr_tokens::Diagnostic;
use tracing::{debug, trace};

pub mod error;
pub mod expr;

pub use error::*;

/// How many `pow` calls may be open at once
pub const MAX_NESTING_DEPTH: usize = 128;

/// Creates the AST from a token sequence.
///
/// Uses exactly one token of lookahead and never backtracks. Parsing stops at the first
/// token that does not fit the grammar, so at most one [SyntaxError] is produced per run.
/// `pow` calls nested deeper than [MAX_NESTING_DEPTH] are rejected with
/// [ErrorKind::NestingTooDeep].
///
/// # Examples
/// ```
/// # use powexpr_parsing::lexer::Lexer;
/// # use powexpr_parsing::parser::Parser;
/// let tokens = Lexer::new("1+2+3").scan().tokens;
/// let parsed = Parser::new(tokens).parse();
/// assert_eq!(parsed.ast.unwrap().to_string(), "Add(Add(1, 2), 3)");
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: TokenStream,
    last_span: Option<Span>,
    /// The number of `pow` calls currently open
    depth: usize,
}

impl Parser {
    /// Creates a new parser over a token sequence
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            last_span: None,
            depth: 0,
        }
    }

    /// Parses one expression followed by the end of the token sequence
    pub fn parse(mut self) -> Parsed {
        let ast = match expr::parse_expr(&mut self) {
            Ok(ast) => ast,
            Err(error) => {
                debug!("parse failed: {error}");
                return Parsed {
                    ast: None,
                    errors: vec![error],
                };
            }
        };
        debug!("parsed {} nodes", ast.node_count());
        let errors = match self.peek() {
            Ok(token) if token.kind() == &TokenKind::Eof => vec![],
            Ok(token) => vec![self.error(ErrorKind::TrailingToken(token.kind().clone()))],
            Err(error) => vec![error],
        };
        Parsed {
            ast: Some(ast),
            errors,
        }
    }

    /// peek the current lookahead
    pub(crate) fn peek(&self) -> Result<&Token> {
        self.tokens
            .peek()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEof))
    }

    pub(crate) fn consume(&mut self) -> Result<Token> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEof))?;
        trace!("consumed {token}");
        self.last_span = Some(token.span());
        Ok(token)
    }

    /// consumes if predicate matches
    pub(crate) fn consume_if<F>(&mut self, predicate: F) -> Result<Option<Token>>
    where
        F: FnOnce(&TokenKind) -> bool,
    {
        if predicate(self.peek()?.kind()) {
            self.consume().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes the lookahead if it matches, otherwise creates the error `or` with the kind
    /// of the token that was found instead
    pub(crate) fn expect<F, E>(&mut self, predicate: F, or: E) -> Result<Token>
    where
        F: FnOnce(&TokenKind) -> bool,
        E: FnOnce(TokenKind) -> ErrorKind,
    {
        match self.consume_if(predicate)? {
            Some(token) => Ok(token),
            None => {
                let found = self.peek()?.kind().clone();
                Err(self.error(or(found)))
            }
        }
    }

    /// Creates an error located at the lookahead, or right after the last consumed token
    pub(crate) fn error(&self, kind: ErrorKind) -> SyntaxError {
        let span = self
            .tokens
            .peek()
            .map(|t| t.span())
            .or(self.last_span.map(|s| s.end()))
            .unwrap_or_default();
        SyntaxError::new(kind, span)
    }
}

/// The output of the parser.
///
/// An AST may be present even when there is an error, which happens when a complete
/// expression is followed by a trailing token. Only [Parsed::into_result] should be used to
/// decide whether the parse succeeded.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub ast: Option<Expr>,
    pub errors: Vec<SyntaxError>,
}

impl Parsed {
    /// Whether an AST was produced without any error
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.ast.is_some()
    }

    /// The errors of this parse as diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(SyntaxError::to_diagnostic).collect()
    }

    /// Gets the AST only if the parse had no errors
    pub fn into_result(self) -> std::result::Result<Expr, Vec<SyntaxError>> {
        match (self.ast, self.errors.is_empty()) {
            (Some(ast), true) => Ok(ast),
            (_, _) => Err(self.errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use num_bigint::BigUint;
    use test_log::test;

    fn test_parser<F>(s: &str, callback: F)
    where
        F: FnOnce(&mut Parser),
    {
        let mut parser = Parser::new(Lexer::new(s).scan().tokens);
        callback(&mut parser)
    }

    #[test]
    fn test_consume() {
        test_parser("3 + 4", |parser| {
            let consumed = parser.consume().unwrap();
            assert_eq!(consumed.kind(), &TokenKind::Int(BigUint::from(3u8)));
            assert_eq!(consumed.span(), Span::new(0, 1, 1, 1));
            let token = parser.peek().unwrap();
            assert_eq!(token.kind(), &TokenKind::Plus);
            assert_eq!(token.span(), Span::new(2, 1, 1, 3));
        });
    }

    #[test]
    fn test_consume_if() {
        test_parser("3 + 4", |parser| {
            assert!(parser
                .consume_if(|kind| kind == &TokenKind::Mult)
                .unwrap()
                .is_none());
            assert!(parser
                .consume_if(|kind| matches!(kind, TokenKind::Int(_)))
                .unwrap()
                .is_some());
        });
    }

    #[test]
    fn test_expect_reports_found_kind() {
        test_parser(")", |parser| {
            let error = parser
                .expect(|kind| kind == &TokenKind::Comma, ErrorKind::ExpectedComma)
                .unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::ExpectedComma(TokenKind::RParen));
        });
    }

    #[test]
    fn test_exhausted_sequence() {
        let mut parser = Parser::new(vec![Token::new(
            Span::new(0, 1, 1, 1),
            TokenKind::Int(BigUint::from(1u8)),
        )]);
        parser.consume().unwrap();
        let error = parser.peek().unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnexpectedEof);
        assert_eq!(error.span(), Span::new(1, 0, 1, 2));
    }

    #[test]
    fn test_trailing_token_keeps_ast() {
        let parsed = Parser::new(Lexer::new("1 2").scan().tokens).parse();
        assert_eq!(parsed.ast.as_ref().map(|a| a.to_string()), Some("1".to_string()));
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(
            parsed.errors[0].kind(),
            &ErrorKind::TrailingToken(TokenKind::Int(BigUint::from(2u8)))
        );
        assert!(!parsed.is_ok());
        assert!(parsed.into_result().is_err());
    }

    #[test]
    fn test_empty_sequence() {
        let parsed = Parser::new(vec![]).parse();
        assert!(parsed.ast.is_none());
        assert_eq!(parsed.errors[0].kind(), &ErrorKind::UnexpectedEof);
        assert_eq!(parsed.errors[0].span(), Span::default());
    }
}
