//! The grammar, one function per non-terminal:
//!
//! ```text
//! Expr     ::= Sum
//! Sum      ::= Prod SumTail
//! SumTail  ::= '+' Prod SumTail | ε
//! Prod     ::= Atom ProdTail
//! ProdTail ::= '*' Atom ProdTail | ε
//! Atom     ::= INT | 'pow' '(' Expr ',' Expr ')'
//! ```
//!
//! The tails are folded into loops, which makes both operators left-associative.

use crate::parser::{ErrorKind, Parser, Result, SyntaxError, MAX_NESTING_DEPTH};
use powexpr_ast::Expr;
use powexpr_tokens::spanned::{Span, Spanned};
use powexpr_tokens::token::TokenKind;

/// Parses an expression
#[inline]
pub fn parse_expr(parser: &mut Parser) -> Result<Expr> {
    parse_sum(parser)
}

fn parse_sum(parser: &mut Parser) -> Result<Expr> {
    let mut l = parse_prod(parser)?;
    while let Some(op) = parser.consume_if(|kind| kind == &TokenKind::Plus)? {
        let r = parse_prod(parser)?;
        l = Expr::add(l, r, op.span());
    }
    Ok(l)
}

fn parse_prod(parser: &mut Parser) -> Result<Expr> {
    let mut l = parse_atom(parser)?;
    while let Some(op) = parser.consume_if(|kind| kind == &TokenKind::Mult)? {
        let r = parse_atom(parser)?;
        l = Expr::mul(l, r, op.span());
    }
    Ok(l)
}

fn parse_atom(parser: &mut Parser) -> Result<Expr> {
    match parser.peek()?.kind() {
        TokenKind::Int(value) => {
            let value = value.clone();
            let token = parser.consume()?;
            Ok(Expr::int(value, token.span()))
        }
        TokenKind::Pow => {
            let pow = parser.consume()?;
            if parser.depth >= MAX_NESTING_DEPTH {
                return Err(SyntaxError::new(
                    ErrorKind::NestingTooDeep(MAX_NESTING_DEPTH),
                    pow.span(),
                ));
            }
            parser.depth += 1;
            let call = parse_pow_call(parser, pow.span());
            parser.depth -= 1;
            call
        }
        found => {
            let found = found.clone();
            Err(parser.error(ErrorKind::ExpectedAtom(found)))
        }
    }
}

/// Parses the rest of a `pow` call, after the keyword at `pow`
fn parse_pow_call(parser: &mut Parser, pow: Span) -> Result<Expr> {
    parser.expect(|kind| kind == &TokenKind::LParen, ErrorKind::ExpectedLParen)?;
    let base = parse_expr(parser)?;
    parser.expect(|kind| kind == &TokenKind::Comma, ErrorKind::ExpectedComma)?;
    let exponent = parse_expr(parser)?;
    let rparen = parser.expect(|kind| kind == &TokenKind::RParen, ErrorKind::ExpectedRParen)?;
    Ok(Expr::pow(base, exponent, pow.join(rparen.span())))
}
