//! Runs the lexer, parser and evaluator in order

use crate::error::TranslateError;
use num_bigint::BigUint;
use powexpr_eval::{BuildEvaluatorError, Evaluated, Evaluator, EvaluatorBuilder};
use powexpr_parsing::lexer::Scanned;
use powexpr_parsing::parser::Parsed;
use powexpr_parsing::{parse, scan};
use powexpr_tokens::Diagnostic;
use tracing::{debug, debug_span};

/// Translates source text into a value.
///
/// Must be configured using a [TranslatorBuilder], or created with the default settings.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    evaluator: Evaluator,
}

impl Translator {
    /// Creates the default TranslatorBuilder
    #[inline]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// The largest exponent a `pow` call may use
    pub fn max_exponent(&self) -> u32 {
        self.evaluator.config().max_exponent
    }

    /// Translates the source.
    ///
    /// The parser always runs, even after lexical errors, but the evaluator only runs on a
    /// tree parsed without any error.
    pub fn translate(&self, src: &str) -> Translation {
        let scanned = debug_span!("scan").in_scope(|| scan(src));
        let parsed = debug_span!("parse").in_scope(|| parse(scanned.tokens.iter().cloned()));
        let evaluated = match (&parsed.ast, parsed.errors.is_empty()) {
            (Some(ast), true) => {
                Some(debug_span!("evaluate").in_scope(|| self.evaluator.evaluate(ast)))
            }
            _ => {
                debug!("skipping evaluation, the source did not parse");
                None
            }
        };
        Translation {
            scanned,
            parsed,
            evaluated,
        }
    }
}

/// Builder for creating a [Translator] instance.
#[derive(Debug, Clone, Default)]
pub struct TranslatorBuilder {
    evaluator: EvaluatorBuilder,
}

impl TranslatorBuilder {
    /// Creates a TranslatorBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest exponent a `pow` call may use
    pub fn max_exponent(mut self, max_exponent: impl Into<BigUint>) -> Self {
        self.evaluator = self.evaluator.max_exponent(max_exponent);
        self
    }

    /// Builds a [Translator] instance from this builder
    pub fn build(self) -> Result<Translator, BuildEvaluatorError> {
        Ok(Translator {
            evaluator: self.evaluator.build()?,
        })
    }
}

/// The output of every stage of a translation.
///
/// `evaluated` is only present when the source parsed without errors.
#[derive(Debug, Clone)]
pub struct Translation {
    pub scanned: Scanned,
    pub parsed: Parsed,
    pub evaluated: Option<Evaluated>,
}

impl Translation {
    /// The value, only when no stage reported a diagnostic
    pub fn value(&self) -> Option<&BigUint> {
        if !self.scanned.is_ok() || !self.parsed.errors.is_empty() {
            return None;
        }
        self.evaluated
            .as_ref()
            .filter(|evaluated| evaluated.errors.is_empty())
            .and_then(|evaluated| evaluated.value.as_ref())
    }

    /// Whether a value was produced
    pub fn is_ok(&self) -> bool {
        self.value().is_some()
    }

    /// Every diagnostic, lexical first, then syntax, then semantic
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.scanned.diagnostics();
        diagnostics.extend(self.parsed.diagnostics());
        if let Some(evaluated) = &self.evaluated {
            diagnostics.extend(evaluated.diagnostics());
        }
        diagnostics
    }

    /// Gets the value, or every diagnostic if there is none
    pub fn into_result(self) -> Result<BigUint, TranslateError> {
        match self.value() {
            Some(value) => Ok(value.clone()),
            None => Err(TranslateError::Multi(self.diagnostics())),
        }
    }
}
