//! fixlog binary
//!
//! Pipe a log stream through it to see fixed-point tokens as decimals:
//! `cargo run --release | fixlog`

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fixlog::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "fixlog", version)]
#[command(about = "Rewrite fixed-point log tokens (f<Q><u|i><raw>) as decimal values")]
struct Cli {
    /// Input files, read in turn as one stream; `-` or no file reads stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[cfg(feature = "logging")]
fn init_logging() {
    // stdout carries the filtered log, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let config = FilterConfig::new().with_sources(cli.files);
    let filter = LineFilter::new(config, TokenRewriter::new(Box::new(LoggingRewriteHandler)))
        .context("invalid arguments")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match filter.run_sources(&mut out) {
        Ok(summary) => {
            tracing::debug!(
                lines = summary.lines,
                tokens_rewritten = summary.tokens_rewritten,
                tokens_skipped = summary.tokens_skipped,
                "input exhausted"
            );
            Ok(())
        },
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("output closed by reader");
            Ok(())
        },
        Err(e) => Err(e.into()),
    }
}
