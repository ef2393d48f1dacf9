use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{char, digit1};
use nom::combinator::{map, value};
use nom::error::{context, VerboseError};
use nom::IResult;
use num_bigint::BigUint;
use powexpr_tokens::token::TokenKind;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Recognizes exactly one token at the start of `src`.
///
/// A digit run that can't be converted into an integer is still consumed as a whole and
/// returned as [TokenKind::Error] carrying the digits.
pub fn parse_token(src: &str) -> Result<TokenKind> {
    context("token", alt((parse_keyword, parse_literal, parse_punctuation)))(src)
}

/// Recognizes the blank characters between tokens, possibly none
pub fn parse_insignificant(src: &str) -> Result<&str> {
    context(
        "insignificant",
        take_while(|c: char| matches!(c, ' ' | '\t' | '\n')),
    )(src)
}

fn parse_keyword(src: &str) -> Result<TokenKind> {
    context("keyword", value(TokenKind::Pow, tag("pow")))(src)
}

/// Only ASCII digits make up a literal, so `BigUint` accepts every run `digit1` matches
fn parse_literal(src: &str) -> Result<TokenKind> {
    context(
        "integer",
        map(digit1, |digits: &str| {
            match BigUint::parse_bytes(digits.as_bytes(), 10) {
                Some(value) => TokenKind::Int(value),
                None => TokenKind::Error(digits.to_string()),
            }
        }),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::LParen, char('(')),
            value(TokenKind::RParen, char(')')),
            value(TokenKind::Comma, char(',')),
            value(TokenKind::Plus, char('+')),
            value(TokenKind::Mult, char('*')),
        )),
    )(src)
}
