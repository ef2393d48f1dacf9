//! Prints translations and self-test reports

use owo_colors::{OwoColorize, Stream};
use powexpr::self_test::SelfTestReport;
use powexpr::Translation;
use powexpr_ast::printer::TreePrinter;
use powexpr_tokens::spanned::{Span, Spanned};
use powexpr_tokens::token::TokenKind;
use std::io::{self, Write};

/// Which sections of a translation are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    pub tokens: bool,
    pub ast: bool,
}

impl Reporter {
    /// Prints one translation of `src`, headed by the name of its source.
    ///
    /// Each diagnostic is followed by the source text it points at, up to the end of its line.
    pub fn translation<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        src: &str,
        translation: &Translation,
    ) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            format!("==> {name}").if_supports_color(Stream::Stdout, |t| t.bold())
        )?;

        if self.tokens {
            banner(out, "tokens")?;
            for token in translation
                .scanned
                .tokens
                .iter()
                .filter(|t| t.kind() != &TokenKind::Eof)
            {
                writeln!(out, "  {token}")?;
            }
        }

        if self.ast {
            if let Some(ast) = &translation.parsed.ast {
                banner(out, "syntax tree")?;
                write!(out, "{}", TreePrinter::default().print(ast))?;
            }
        }

        let diagnostics = translation.diagnostics();
        if !diagnostics.is_empty() {
            banner(out, "diagnostics")?;
            for diagnostic in &diagnostics {
                writeln!(
                    out,
                    "{}",
                    diagnostic.if_supports_color(Stream::Stdout, |t| t.red())
                )?;
                if let Some(text) = excerpt(src, diagnostic.span()) {
                    writeln!(out, "    at {text:?}")?;
                }
            }
        }

        banner(out, "result")?;
        match translation.value() {
            Some(value) => writeln!(
                out,
                "{}",
                value.if_supports_color(Stream::Stdout, |t| t.green())
            ),
            None => writeln!(
                out,
                "{}",
                format!("no value, {} diagnostic(s)", diagnostics.len())
                    .if_supports_color(Stream::Stdout, |t| t.red())
            ),
        }
    }
}

/// Prints one line per scenario followed by a summary
pub fn self_test_report<W: Write>(out: &mut W, report: &SelfTestReport) -> io::Result<()> {
    banner(out, "self test")?;
    for result in &report.results {
        let status = if result.passed() {
            "PASS".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
        } else {
            "FAIL".if_supports_color(Stream::Stdout, |t| t.red()).to_string()
        };
        let actual = match &result.outcome {
            Ok(value) => value.to_string(),
            Err(error) => format!("{} diagnostic(s)", error.diagnostics().len()),
        };
        writeln!(
            out,
            "{status} {} = {} (got {actual})",
            result.scenario.source, result.scenario.expected
        )?;
    }
    writeln!(
        out,
        "{} passed, {} failed",
        report.passed(),
        report.failed()
    )
}

/// The first line of source text under `span`, if it covers any
fn excerpt(src: &str, span: Span) -> Option<&str> {
    span.slice(src)
        .and_then(|text| text.lines().next())
        .filter(|line| !line.is_empty())
}

fn banner<W: Write>(out: &mut W, stage: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("--- {stage} ---").if_supports_color(Stream::Stdout, |t| t.cyan())
    )
}
