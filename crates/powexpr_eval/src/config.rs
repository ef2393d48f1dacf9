//! Evaluator configuration

use crate::Evaluator;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use thiserror::Error;

/// The largest exponent accepted by default
pub const DEFAULT_MAX_EXPONENT: u32 = 1000;

/// Limits enforced while evaluating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// `pow` calls with a larger exponent are rejected before being computed
    pub max_exponent: u32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_exponent: DEFAULT_MAX_EXPONENT,
        }
    }
}

/// Builder for creating an [Evaluator] instance.
#[derive(Debug, Clone)]
pub struct EvaluatorBuilder {
    pub max_exponent: BigUint,
}

impl EvaluatorBuilder {
    /// Creates an EvaluatorBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest exponent a `pow` call may use
    pub fn max_exponent(mut self, max_exponent: impl Into<BigUint>) -> Self {
        self.max_exponent = max_exponent.into();
        self
    }

    /// Builds an [Evaluator] instance from this builder
    pub fn build(self) -> Result<Evaluator, BuildEvaluatorError> {
        let max_exponent = self
            .max_exponent
            .to_u32()
            .ok_or(BuildEvaluatorError::MaxExponentOutOfRange(self.max_exponent))?;
        Ok(Evaluator::new(EvalConfig { max_exponent }))
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self {
            max_exponent: BigUint::from(DEFAULT_MAX_EXPONENT),
        }
    }
}

/// An error occurred while building an [Evaluator] instance
#[derive(Debug, Error)]
pub enum BuildEvaluatorError {
    #[error("maximum exponent {0} is out of range, it can be at most {}", u32::MAX)]
    MaxExponentOutOfRange(BigUint),
}
