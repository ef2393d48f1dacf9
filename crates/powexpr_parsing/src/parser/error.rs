use powexpr_tokens::token::TokenKind;
use powexpr_tokens::{SpannedError, Stage, StageError};

/// Represents an error occurring during parsing
pub type SyntaxError = SpannedError<ErrorKind>;

/// [SyntaxError] kind.
///
/// Most variants carry the kind of the token that was found instead of the expected one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected an integer or 'pow', found {0}")]
    ExpectedAtom(TokenKind),
    #[error("expected '(' after 'pow', found {0}")]
    ExpectedLParen(TokenKind),
    #[error("expected ',' between the arguments of 'pow', found {0}")]
    ExpectedComma(TokenKind),
    #[error("expected ')' to close 'pow', found {0}")]
    ExpectedRParen(TokenKind),
    #[error("'pow' calls nested more than {0} levels deep")]
    NestingTooDeep(usize),
    #[error("unexpected trailing token {0}")]
    TrailingToken(TokenKind),
    #[error("unexpected end of token sequence")]
    UnexpectedEof,
}

impl StageError for ErrorKind {
    const STAGE: Stage = Stage::Syntax;
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
