#![doc = include_str!("../README.md")]

pub mod error;
pub mod translator;

pub use error::TranslateError;
pub use translator::{Translation, Translator, TranslatorBuilder};

pub use powexpr_ast::Expr;
pub use powexpr_eval::{BuildEvaluatorError, Evaluated, DEFAULT_MAX_EXPONENT};
pub use powexpr_parsing::lexer::Scanned;
pub use powexpr_parsing::parser::Parsed;
pub use powexpr_tokens::{Diagnostic, Stage};

/// Translates the source with the default configuration
pub fn translate(src: &str) -> Translation {
    Translator::default().translate(src)
}
