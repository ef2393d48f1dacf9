#![doc = include_str!("../README.md")]

use crate::args::Args;
use crate::report::{self_test_report, Reporter};
use clap::Parser;
use eyre::{bail, WrapErr};
use powexpr::{self_test, Translation, Translator};
use std::io::{stderr, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;
use tracing::metadata::LevelFilter;
use tracing::{debug, error_span, trace, Instrument};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

mod args;
mod report;

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting powexpr with args: {args:?}");
    debug!("powexpr version: {}", env!("CARGO_PKG_VERSION"));

    let translator = Translator::builder()
        .max_exponent(args.max_exponent.clone())
        .build()?;

    let mut out = stdout().lock();
    if args.self_test {
        let report = self_test::run(&translator);
        self_test_report(&mut out, &report)?;
        return Ok(exit_code(report.all_passed()));
    }

    let sources = read_sources(&args.files).await?;
    debug!("translating {} source(s)", sources.len());
    let reporter = Reporter {
        tokens: args.tokens,
        ast: args.ast,
    };
    let mut all_ok = true;
    for (source, translation) in translate_all(&translator, sources).await {
        reporter.translation(&mut out, &source.name, &source.text, &translation)?;
        all_ok &= translation.is_ok();
    }
    out.flush()?;
    Ok(exit_code(all_ok))
}

/// An expression and where it was read from
#[derive(Debug)]
struct Source {
    name: String,
    text: String,
}

/// Reads every file, or standard input when there are none
async fn read_sources(files: &[PathBuf]) -> eyre::Result<Vec<Source>> {
    let mut sources = vec![];
    if files.is_empty() {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .wrap_err("could not read standard input")?;
        sources.push(Source {
            name: "<stdin>".to_string(),
            text,
        });
    } else {
        for file in files {
            let text = tokio::fs::read_to_string(file)
                .await
                .wrap_err_with(|| format!("could not read {file:?}"))?;
            sources.push(Source {
                name: file.display().to_string(),
                text,
            });
        }
    }

    for source in &sources {
        if source.text.trim().is_empty() {
            bail!("{} does not contain an expression", source.name);
        }
    }
    Ok(sources)
}

/// Translates every source concurrently, keeping the order they were given in
async fn translate_all(
    translator: &Translator,
    sources: Vec<Source>,
) -> Vec<(Source, Translation)> {
    let mut join_set = JoinSet::new();
    for (index, source) in sources.into_iter().enumerate() {
        let translator = translator.clone();
        let name = source.name.clone();
        join_set.spawn(
            async move {
                let translation = translator.translate(&source.text);
                (index, source, translation)
            }
            .instrument(error_span!("translate", source = %name)),
        );
    }
    let mut translated = join_set.join_all().await;
    translated.sort_by_key(|(index, ..)| *index);
    translated
        .into_iter()
        .map(|(_, source, translation)| (source, translation))
        .collect()
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
