use num_bigint::BigUint;
use powexpr_tokens::{SpannedError, Stage, StageError};
use thiserror::Error;

/// A rule violation found while evaluating, located at the offending node
pub type SemanticError = SpannedError<SemanticErrorKind>;

/// [SemanticError] kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticErrorKind {
    #[error("exponent too large: {exponent} exceeds the limit of {limit}")]
    ExponentTooLarge { exponent: BigUint, limit: u32 },
}

impl StageError for SemanticErrorKind {
    const STAGE: Stage = Stage::Semantic;
}
