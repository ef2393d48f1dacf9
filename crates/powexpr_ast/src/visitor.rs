//! Visits an [Expr] tree.
//!
//! [walk] drives a [Visitor] over the tree with an explicit stack, so a visitor works on
//! trees of any depth. A node with operands is seen three times: [Visitor::enter] before its
//! first operand, [Visitor::between] after it, and [Visitor::leave] once both operands are
//! done. A literal is entered and left directly.

use crate::expr::Expr;

/// A visitor over an expression tree.
///
/// `depth` is 0 for the root and grows by one per level.
pub trait Visitor {
    type Err;

    fn enter(&mut self, _expr: &Expr, _depth: usize) -> Result<(), Self::Err> {
        Ok(())
    }

    fn between(&mut self, _expr: &Expr, _depth: usize) -> Result<(), Self::Err> {
        Ok(())
    }

    fn leave(&mut self, _expr: &Expr, _depth: usize) -> Result<(), Self::Err> {
        Ok(())
    }
}

enum Step<'a> {
    Enter(&'a Expr, usize),
    Between(&'a Expr, usize),
    Leave(&'a Expr, usize),
}

/// Walks `expr` left to right, stopping at the first error of the visitor
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) -> Result<(), V::Err> {
    let mut steps = vec![Step::Enter(expr, 0)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(expr, depth) => {
                visitor.enter(expr, depth)?;
                match expr.operands() {
                    Some((left, right)) => {
                        steps.push(Step::Leave(expr, depth));
                        steps.push(Step::Enter(right, depth + 1));
                        steps.push(Step::Between(expr, depth));
                        steps.push(Step::Enter(left, depth + 1));
                    }
                    None => visitor.leave(expr, depth)?,
                }
            }
            Step::Between(expr, depth) => visitor.between(expr, depth)?,
            Step::Leave(expr, depth) => visitor.leave(expr, depth)?,
        }
    }
    Ok(())
}
