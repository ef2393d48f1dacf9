//! The error of a failed translation

use itertools::Itertools as _;
use powexpr_tokens::Diagnostic;
use thiserror::Error;

/// A translation that did not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Every diagnostic of the translation, in stage order
    #[error("{}", .0.iter().join("\n"))]
    Multi(Vec<Diagnostic>),
}

impl TranslateError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            TranslateError::Multi(diagnostics) => diagnostics,
        }
    }
}

impl From<Vec<Diagnostic>> for TranslateError {
    fn from(value: Vec<Diagnostic>) -> Self {
        TranslateError::Multi(value)
    }
}
