#![doc = include_str!("../README.md")]

use crate::spanned::{Span, Spanned};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};

pub mod spanned;
pub mod token;

/// The stage of the pipeline that produced a [Diagnostic]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
}

/// An error kind that is only ever produced by one [Stage]
pub trait StageError: Display {
    const STAGE: Stage;
}

/// An error with a location
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedError<E> {
    error: E,
    location: Span,
}

impl<E> SpannedError<E> {
    pub fn new(error: E, location: Span) -> Self {
        Self { error, location }
    }

    /// Gets the kind of this error
    pub fn kind(&self) -> &E {
        &self.error
    }

    pub fn into_kind(self) -> E {
        self.error
    }
}

impl<E: StageError> SpannedError<E> {
    /// Creates the diagnostic record of this error
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(E::STAGE, self.error.to_string(), self.location)
    }
}

impl<E> Spanned for SpannedError<E> {
    fn span(&self) -> Span {
        self.location
    }
}

impl<E: Display> Display for SpannedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (line {}, column {})",
            self.error,
            self.location.line(),
            self.location.column()
        )
    }
}

impl<E: Debug + Display> std::error::Error for SpannedError<E> {}

impl<E: StageError> From<SpannedError<E>> for Diagnostic {
    fn from(value: SpannedError<E>) -> Self {
        value.to_diagnostic()
    }
}

/// A structured record describing one problem found at a given stage and source position.
///
/// Stages accumulate these instead of stopping on the first problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    stage: Stage,
    message: String,
    span: Span,
}

impl Diagnostic {
    pub fn new(stage: Stage, message: impl Into<String>, span: Span) -> Self {
        Self {
            stage,
            message: message.into(),
            span,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        self.span.line()
    }

    pub fn column(&self) -> usize {
        self.span.column()
    }
}

impl Spanned for Diagnostic {
    fn span(&self) -> Span {
        self.span
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] line {}, column {}: {}",
            self.stage,
            self.line(),
            self.column(),
            self.message
        )
    }
}

/// Renders diagnostics one per line
pub fn render<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> String {
    diagnostics.into_iter().join("\n")
}
