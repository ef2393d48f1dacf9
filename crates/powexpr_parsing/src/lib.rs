#![doc = include_str!("../README.md")]

use crate::lexer::{Lexer, Scanned};
use crate::parser::{Parsed, Parser};
use powexpr_tokens::token::Token;

pub mod lexer;
pub mod parser;

/// Scans source text into tokens, recording lexical errors along the way.
pub fn scan(src: &str) -> Scanned {
    Lexer::new(src).scan()
}

/// Parses a token sequence, which should end with an EOF token, into an AST.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Parsed {
    Parser::new(tokens).parse()
}
