//! Prints an [Expr] as an indented tree, one node per line

use crate::expr::Expr;
use crate::visitor::{walk, Visitor};
use std::fmt::{self, Write};

/// Prints trees with a configurable indent per level
#[derive(Debug, Clone, Copy)]
pub struct TreePrinter {
    indent: usize,
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl TreePrinter {
    /// Creates a printer indenting each level by `indent` spaces
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Prints the tree into a new string
    pub fn print(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write(&mut out, expr)
            .expect("writing to a String never fails");
        out
    }

    /// Writes the tree into `out`
    pub fn write<W: Write>(&self, out: &mut W, expr: &Expr) -> fmt::Result {
        walk(
            &mut Printing {
                out,
                indent: self.indent,
            },
            expr,
        )
    }
}

struct Printing<'w, W: Write> {
    out: &'w mut W,
    indent: usize,
}

impl<W: Write> Visitor for Printing<'_, W> {
    type Err = fmt::Error;

    fn enter(&mut self, expr: &Expr, depth: usize) -> fmt::Result {
        let pad = depth * self.indent;
        write!(self.out, "{:pad$}", "")?;
        match expr {
            Expr::IntLiteral(int) => writeln!(self.out, "INT: {}", int.value),
            Expr::Add(_) => writeln!(self.out, "ADD (+)"),
            Expr::Mul(_) => writeln!(self.out, "MULT (*)"),
            Expr::Pow(_) => writeln!(self.out, "POW"),
        }
    }
}
