#![doc = include_str!("../README.md")]

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use powexpr_ast::visitor::{walk, Visitor};
use powexpr_ast::{Expr, ExprPow};
use powexpr_tokens::Diagnostic;
use std::convert::Infallible;
use tracing::{debug, trace};

pub mod config;
pub mod error;

pub use config::{BuildEvaluatorError, EvalConfig, EvaluatorBuilder, DEFAULT_MAX_EXPONENT};
pub use error::{SemanticError, SemanticErrorKind};

/// Evaluates an expression with the default configuration
pub fn evaluate(expr: &Expr) -> Evaluated {
    Evaluator::default().evaluate(expr)
}

/// Computes the value of an expression tree, post-order.
///
/// A node with an absent operand is itself absent without adding an error, so every
/// [SemanticError] points at the node that actually broke a rule. Both operands of a node are
/// always evaluated, which means violations in sibling subtrees are all reported.
///
/// # Examples
/// ```
/// # use powexpr_eval::Evaluator;
/// # use powexpr_ast::Expr;
/// # use powexpr_tokens::spanned::Span;
/// # use num_bigint::BigUint;
/// let s = Span::default();
/// let expr = Expr::pow(Expr::int(2u8, s), Expr::int(10u8, s), s);
/// let evaluated = Evaluator::builder().build().unwrap().evaluate(&expr);
/// assert_eq!(evaluated.value, Some(BigUint::from(1024u32)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Creates the default EvaluatorBuilder
    #[inline]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates the expression
    pub fn evaluate(&self, expr: &Expr) -> Evaluated {
        let mut evaluation = Evaluation {
            limit: self.config.max_exponent,
            values: vec![],
            errors: vec![],
        };
        if let Err(never) = walk(&mut evaluation, expr) {
            match never {}
        }
        let Evaluation { values, errors, .. } = evaluation;
        let value = values.into_iter().next().flatten();
        match &value {
            Some(value) => debug!("evaluated to {value}"),
            None => debug!("evaluation failed with {} errors", errors.len()),
        }
        Evaluated { value, errors }
    }
}

/// One evaluation in progress.
///
/// Nodes are computed as they are left, so the values of a node's operands are the top two
/// entries of `values` at that point.
struct Evaluation {
    limit: u32,
    values: Vec<Option<BigUint>>,
    errors: Vec<SemanticError>,
}

impl Evaluation {
    fn value_of(&mut self, expr: &Expr) -> Option<BigUint> {
        match expr {
            Expr::IntLiteral(int) => Some(int.value.clone()),
            Expr::Add(_) => {
                let (l, r) = self.operands();
                Some(l? + r?)
            }
            Expr::Mul(_) => {
                let (l, r) = self.operands();
                Some(l? * r?)
            }
            Expr::Pow(pow) => {
                let (base, exponent) = self.operands();
                self.pow(pow, base?, exponent?)
            }
        }
    }

    fn operands(&mut self) -> (Option<BigUint>, Option<BigUint>) {
        let right = self.values.pop().flatten();
        let left = self.values.pop().flatten();
        (left, right)
    }

    fn pow(&mut self, call: &ExprPow, base: BigUint, exponent: BigUint) -> Option<BigUint> {
        let limit = self.limit;
        match exponent.to_u32() {
            Some(e) if e <= limit => {
                trace!("computing {base}^{e}");
                Some(base.pow(e))
            }
            _ => {
                debug!("rejected exponent {exponent}, limit is {limit}");
                self.errors.push(SemanticError::new(
                    SemanticErrorKind::ExponentTooLarge { exponent, limit },
                    call.span,
                ));
                None
            }
        }
    }
}

impl Visitor for Evaluation {
    type Err = Infallible;

    fn leave(&mut self, expr: &Expr, _depth: usize) -> Result<(), Self::Err> {
        let value = self.value_of(expr);
        self.values.push(value);
        Ok(())
    }
}

/// The output of the evaluator
#[derive(Debug, Clone)]
pub struct Evaluated {
    pub value: Option<BigUint>,
    pub errors: Vec<SemanticError>,
}

impl Evaluated {
    /// Whether a value was produced without any error
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.value.is_some()
    }

    /// The errors of this evaluation as diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(SemanticError::to_diagnostic).collect()
    }

    /// Gets the value only if evaluation had no errors
    pub fn into_result(self) -> Result<BigUint, Vec<SemanticError>> {
        match (self.value, self.errors.is_empty()) {
            (Some(value), true) => Ok(value),
            (_, _) => Err(self.errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powexpr_parsing::{parse, scan};
    use powexpr_tokens::spanned::{Span, Spanned};
    use test_log::test;

    fn ast(src: &str) -> Expr {
        parse(scan(src).tokens)
            .into_result()
            .expect("should parse")
    }

    fn eval(src: &str) -> Evaluated {
        evaluate(&ast(src))
    }

    fn value(src: &str) -> BigUint {
        eval(src).into_result().expect("should evaluate")
    }

    #[test]
    fn test_precedence() {
        assert_eq!(value("2+3*4"), BigUint::from(14u8));
        assert_eq!(value("pow(2,3)*4"), BigUint::from(32u8));
    }

    #[test]
    fn test_exponent_boundary() {
        let evaluated = eval("pow(2, 1000)");
        assert!(evaluated.is_ok());
        assert_eq!(evaluated.value, Some(BigUint::from(2u8).pow(1000)));

        let evaluated = eval("pow(2, 1001)");
        assert!(evaluated.value.is_none());
        assert_eq!(evaluated.errors.len(), 1);
        assert_eq!(
            evaluated.errors[0].kind(),
            &SemanticErrorKind::ExponentTooLarge {
                exponent: BigUint::from(1001u16),
                limit: 1000
            }
        );
    }

    #[test]
    fn test_error_points_at_pow_call() {
        let evaluated = eval("1 + pow(2, 1001)");
        assert_eq!(evaluated.errors[0].span(), Span::new(4, 12, 1, 5));
        assert_eq!(
            evaluated.diagnostics()[0].to_string(),
            "[semantic] line 1, column 5: exponent too large: 1001 exceeds the limit of 1000"
        );
    }

    #[test]
    fn test_limit_applies_to_computed_exponent() {
        assert!(eval("pow(1, 10*100)").is_ok());
        assert!(!eval("pow(1, 10*100+1)").is_ok());
        assert!(!eval("pow(0, pow(2, 64))").is_ok());
    }

    #[test]
    fn test_absent_propagates_without_new_errors() {
        let evaluated = eval("pow(pow(2, 2000), 2) * 3 + 1");
        assert!(evaluated.value.is_none());
        assert_eq!(evaluated.errors.len(), 1);
    }

    #[test]
    fn test_sibling_violations_are_all_reported() {
        let evaluated = eval("pow(2, 5000) + pow(3, 6000)");
        let columns = evaluated
            .errors
            .iter()
            .map(|e| e.span().column())
            .collect::<Vec<_>>();
        assert_eq!(columns, vec![1, 16]);
    }

    #[test]
    fn test_custom_limit() {
        let evaluator = Evaluator::builder().max_exponent(3u8).build().unwrap();
        assert_eq!(
            evaluator.evaluate(&ast("pow(10, 3)")).value,
            Some(BigUint::from(1000u16))
        );
        let evaluated = evaluator.evaluate(&ast("pow(10, 4)"));
        assert_eq!(
            evaluated.diagnostics()[0].message(),
            "exponent too large: 4 exceeds the limit of 3"
        );
    }

    #[test]
    fn test_big_literals_are_exact() {
        assert_eq!(
            value("99999999999999999999 * 99999999999999999999 + 1").to_string(),
            "9999999999999999999800000000000000000002"
        );
    }

    #[test]
    fn test_long_chain() {
        let src = vec!["1"; 200_000].join("+");
        assert_eq!(value(&src), BigUint::from(200_000u32));
        let src = vec!["2"; 20_000].join("*");
        assert_eq!(value(&src), BigUint::from(2u8).pow(20_000));
    }

    #[test]
    fn test_long_chain_with_violation() {
        let src = format!("{}+pow(2, 1001)+1", vec!["1"; 100_000].join("+"));
        let evaluated = eval(&src);
        assert!(evaluated.value.is_none());
        assert_eq!(evaluated.errors.len(), 1);
        assert_eq!(evaluated.errors[0].span().column(), 200_001);
    }

    #[test]
    fn test_zero_powers() {
        assert_eq!(value("pow(0, 0)"), BigUint::from(1u8));
        assert_eq!(value("pow(0, 3)"), BigUint::from(0u8));
    }
}
