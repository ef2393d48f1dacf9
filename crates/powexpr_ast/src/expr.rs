//! Expression tree.
//!
//! A chain like `1+1+...+1` nests one level per operator, so trees get as deep as the source
//! is long. None of the whole-tree operations here recurse: dropping, cloning, comparing and
//! displaying all keep their pending nodes on the heap.

use crate::visitor::{walk, Visitor};
use num_bigint::BigUint;
use powexpr_tokens::spanned::{Span, Spanned};
use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

/// An expression.
///
/// Every node owns its children, so a parsed expression is always a strict tree.
pub enum Expr {
    IntLiteral(ExprInt),
    Add(ExprBinary),
    Mul(ExprBinary),
    Pow(ExprPow),
}

impl Expr {
    /// Creates an integer literal
    pub fn int(value: impl Into<BigUint>, span: Span) -> Self {
        Expr::IntLiteral(ExprInt {
            value: value.into(),
            span,
        })
    }

    /// Creates `left + right`
    pub fn add(left: Expr, right: Expr, op: Span) -> Self {
        Expr::Add(ExprBinary::new(left, right, op))
    }

    /// Creates `left * right`
    pub fn mul(left: Expr, right: Expr, op: Span) -> Self {
        Expr::Mul(ExprBinary::new(left, right, op))
    }

    /// Creates `pow(base, exponent)`, where `span` covers the whole call
    pub fn pow(base: Expr, exponent: Expr, span: Span) -> Self {
        Expr::Pow(ExprPow {
            base: Box::new(base),
            exponent: Box::new(exponent),
            span,
        })
    }

    /// The two operands of this node in source order, or `None` for a literal
    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::IntLiteral(_) => None,
            Expr::Add(b) | Expr::Mul(b) => Some((&b.left, &b.right)),
            Expr::Pow(p) => Some((&p.base, &p.exponent)),
        }
    }

    /// The number of nodes in this tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            if let Some((left, right)) = expr.operands() {
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }

    /// A literal without children, left behind in place of a detached operand
    fn hollow() -> Self {
        Expr::IntLiteral(ExprInt {
            value: BigUint::default(),
            span: Span::default(),
        })
    }

    /// Moves every operand that has children of its own into `into`
    fn detach_operands(&mut self, into: &mut Vec<Expr>) {
        let (left, right) = match self {
            Expr::IntLiteral(_) => return,
            Expr::Add(b) | Expr::Mul(b) => (&mut b.left, &mut b.right),
            Expr::Pow(p) => (&mut p.base, &mut p.exponent),
        };
        for operand in [left, right] {
            if operand.operands().is_some() {
                into.push(mem::replace(&mut **operand, Expr::hollow()));
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = vec![];
        self.detach_operands(&mut detached);
        while let Some(mut expr) = detached.pop() {
            expr.detach_operands(&mut detached);
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::IntLiteral(i) => i.span,
            Expr::Add(b) | Expr::Mul(b) => b.span,
            Expr::Pow(p) => p.span,
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        let mut cloning = Cloning::default();
        if let Err(never) = walk(&mut cloning, self) {
            match never {}
        }
        cloning
            .built
            .pop()
            .expect("a walk always leaves the root behind")
    }
}

/// Rebuilds a tree bottom-up, every node taking its operands off the top of `built`
#[derive(Default)]
struct Cloning {
    built: Vec<Expr>,
}

impl Visitor for Cloning {
    type Err = Infallible;

    fn leave(&mut self, expr: &Expr, _depth: usize) -> Result<(), Self::Err> {
        let cloned = match expr {
            Expr::IntLiteral(int) => Expr::IntLiteral(int.clone()),
            Expr::Add(b) | Expr::Mul(b) => {
                let right = self.built.pop().expect("right operand was cloned");
                let left = self.built.pop().expect("left operand was cloned");
                let binary = ExprBinary {
                    left: Box::new(left),
                    right: Box::new(right),
                    op: b.op,
                    span: b.span,
                };
                match expr {
                    Expr::Add(_) => Expr::Add(binary),
                    _ => Expr::Mul(binary),
                }
            }
            Expr::Pow(p) => {
                let exponent = self.built.pop().expect("exponent was cloned");
                let base = self.built.pop().expect("base was cloned");
                Expr::pow(base, exponent, p.span)
            }
        };
        self.built.push(cloned);
        Ok(())
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            let same = match (a, b) {
                (Expr::IntLiteral(a), Expr::IntLiteral(b)) => a == b,
                (Expr::Add(a), Expr::Add(b)) | (Expr::Mul(a), Expr::Mul(b)) => {
                    a.op == b.op && a.span == b.span
                }
                (Expr::Pow(a), Expr::Pow(b)) => a.span == b.span,
                _ => false,
            };
            if !same {
                return false;
            }
            if let (Some((al, ar)), Some((bl, br))) = (a.operands(), b.operands()) {
                pending.push((ar, br));
                pending.push((al, bl));
            }
        }
        true
    }
}

impl Eq for Expr {}

impl Debug for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&format_args!("{self}")).finish()
    }
}

/// Writes the tree in constructor form, such as `Add(Mul(2, 3), 4)`
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        walk(&mut ConstructorForm(f), self)
    }
}

struct ConstructorForm<'f, 'a>(&'f mut Formatter<'a>);

impl Visitor for ConstructorForm<'_, '_> {
    type Err = fmt::Error;

    fn enter(&mut self, expr: &Expr, _depth: usize) -> fmt::Result {
        match expr {
            Expr::IntLiteral(i) => write!(self.0, "{}", i.value),
            Expr::Add(_) => self.0.write_str("Add("),
            Expr::Mul(_) => self.0.write_str("Mul("),
            Expr::Pow(_) => self.0.write_str("Pow("),
        }
    }

    fn between(&mut self, _expr: &Expr, _depth: usize) -> fmt::Result {
        self.0.write_str(", ")
    }

    fn leave(&mut self, expr: &Expr, _depth: usize) -> fmt::Result {
        match expr {
            Expr::IntLiteral(_) => Ok(()),
            _ => self.0.write_str(")"),
        }
    }
}

/// An integer literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprInt {
    pub value: BigUint,
    pub span: Span,
}

/// A binary operation, the operator is given by the [Expr] variant holding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprBinary {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    /// The span of the operator token
    pub op: Span,
    /// From the start of `left` to the end of `right`
    pub span: Span,
}

impl ExprBinary {
    pub fn new(left: Expr, right: Expr, op: Span) -> Self {
        let span = left.span().join(right.span());
        Self {
            left: Box::new(left),
            right: Box::new(right),
            op,
            span,
        }
    }
}

/// A `pow(base, exponent)` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprPow {
    pub base: Box<Expr>,
    pub exponent: Box<Expr>,
    /// From the `pow` keyword up to and including the closing parenthesis
    pub span: Span,
}
