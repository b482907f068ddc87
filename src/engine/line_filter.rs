// ============================================================================
// Line Filter
// Read a line, rewrite it, write it, flush; repeat until input ends
// ============================================================================

use super::error::{FilterError, FilterResult};
use super::rewriter::TokenRewriter;
use crate::domain::{FilterConfig, FilterSummary, InputSource};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Streams lines from the configured sources through a [`TokenRewriter`].
///
/// Strictly sequential. The only blocking point is the read; nothing is
/// held across lines besides the reusable line buffer.
pub struct LineFilter {
    config: FilterConfig,
    rewriter: TokenRewriter,
}

impl LineFilter {
    /// Create a filter, rejecting an invalid configuration.
    pub fn new(config: FilterConfig, rewriter: TokenRewriter) -> FilterResult<Self> {
        config.validate().map_err(FilterError::Config)?;
        Ok(Self { config, rewriter })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter every configured source into `writer`, in order, as one stream.
    ///
    /// Files are opened when their turn comes, so output from earlier
    /// sources is already written when a later one fails to open.
    pub fn run_sources<W: Write>(&self, writer: &mut W) -> FilterResult<FilterSummary> {
        let mut total = FilterSummary::default();

        for source in self.config.effective_sources() {
            tracing::debug!(%source, "filtering input");
            let summary = match &source {
                InputSource::Stdin => {
                    let stdin = io::stdin();
                    let mut reader = stdin.lock();
                    self.run(&mut reader, writer, &source)?
                },
                InputSource::File(path) => {
                    let file = File::open(path).map_err(|e| FilterError::Open {
                        path: path.clone(),
                        source: e,
                    })?;
                    self.run(&mut BufReader::new(file), writer, &source)?
                },
            };
            tracing::debug!(
                %source,
                lines = summary.lines,
                tokens_rewritten = summary.tokens_rewritten,
                "finished input"
            );
            total.merge(summary);
        }

        writer.flush().map_err(FilterError::Write)?;
        Ok(total)
    }

    /// Filter a single reader into `writer`. `source` names the reader in
    /// error messages.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        source: &InputSource,
    ) -> FilterResult<FilterSummary> {
        let mut summary = FilterSummary::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| FilterError::Read {
                    input: source.to_string(),
                    source: e,
                })?;
            if read == 0 {
                break;
            }

            let rewrite = self.rewriter.rewrite(&line);
            writer
                .write_all(&rewrite.text)
                .map_err(FilterError::Write)?;
            if self.config.line_buffered {
                writer.flush().map_err(FilterError::Write)?;
            }

            summary.lines += 1;
            summary.tokens_rewritten += rewrite.tokens_rewritten;
            summary.tokens_skipped += rewrite.tokens_skipped;
        }

        Ok(summary)
    }
}
