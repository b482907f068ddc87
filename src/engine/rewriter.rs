// ============================================================================
// Token Rewriter
// Replaces every fixed-point token in a line with its decimal value
// ============================================================================

use super::pattern::TOKEN_PATTERN;
use crate::domain::{FixedToken, TokenError};
use crate::interfaces::{NoOpRewriteHandler, RewriteEvent, RewriteHandler};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::HashMap;

/// Distinct literals per line looked up by linear scan before switching to
/// a hash index
const INLINE_TOKENS: usize = 4;

/// A rewritten line plus the number of token occurrences touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRewrite<'l> {
    pub text: Cow<'l, [u8]>,
    pub tokens_rewritten: u64,
    pub tokens_skipped: u64,
}

/// One distinct token literal within a line, evaluated once
struct DistinctToken<'l> {
    literal: &'l [u8],
    outcome: Result<(FixedToken, String), TokenError>,
    occurrences: usize,
}

impl DistinctToken<'_> {
    fn into_event(self) -> RewriteEvent {
        // The pattern only matches ASCII
        let literal = String::from_utf8_lossy(self.literal).into_owned();
        let occurrences = self.occurrences;
        match self.outcome {
            Ok((token, replacement)) => RewriteEvent::TokenRewritten {
                literal,
                token,
                replacement,
                occurrences,
            },
            Err(error) => RewriteEvent::TokenSkipped {
                literal,
                error,
                occurrences,
            },
        }
    }
}

/// Rewrites fixed-point tokens in single lines.
///
/// Matches are found left to right and never overlap. Each distinct
/// literal is converted once and every occurrence of it gets the same
/// decimal text. Everything outside a match is copied byte-for-byte,
/// including the line terminator.
pub struct TokenRewriter {
    handler: Box<dyn RewriteHandler>,
}

impl Default for TokenRewriter {
    fn default() -> Self {
        Self::new(Box::new(NoOpRewriteHandler))
    }
}

impl TokenRewriter {
    pub fn new(handler: Box<dyn RewriteHandler>) -> Self {
        Self { handler }
    }

    /// Rewrite one line. Lines without tokens are returned borrowed.
    pub fn rewrite<'l>(&self, line: &'l [u8]) -> LineRewrite<'l> {
        let mut matches = TOKEN_PATTERN.captures_iter(line).peekable();
        if matches.peek().is_none() {
            return LineRewrite {
                text: Cow::Borrowed(line),
                tokens_rewritten: 0,
                tokens_skipped: 0,
            };
        }

        let mut distinct: SmallVec<[DistinctToken<'l>; INLINE_TOKENS]> = SmallVec::new();
        let mut index: HashMap<&'l [u8], usize> = HashMap::new();
        let mut out = Vec::with_capacity(line.len() + 16);
        let mut last = 0;

        for caps in matches {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.extend_from_slice(&line[last..whole.start()]);
            last = whole.end();

            let literal = whole.as_bytes();
            let known = if index.is_empty() {
                distinct.iter().position(|d| d.literal == literal)
            } else {
                index.get(literal).copied()
            };
            let idx = match known {
                Some(idx) => idx,
                None => {
                    let group = |i| caps.get(i).map(|m| m.as_bytes()).unwrap_or_default();
                    let tag = group(2).first().copied().unwrap_or_default();
                    let outcome = FixedToken::from_parts(group(1), tag, group(3))
                        .and_then(|token| token.render().map(|text| (token, text)));
                    distinct.push(DistinctToken {
                        literal,
                        outcome,
                        occurrences: 0,
                    });
                    let idx = distinct.len() - 1;
                    if distinct.len() > INLINE_TOKENS {
                        if index.is_empty() {
                            let spilled = distinct.iter().enumerate().map(|(i, d)| (d.literal, i));
                            index.extend(spilled);
                        } else {
                            index.insert(literal, idx);
                        }
                    }
                    idx
                },
            };

            let entry = &mut distinct[idx];
            entry.occurrences += 1;
            match &entry.outcome {
                Ok((_, text)) => out.extend_from_slice(text.as_bytes()),
                Err(_) => out.extend_from_slice(literal),
            }
        }
        out.extend_from_slice(&line[last..]);

        let observe = self.handler.wants_events();
        let mut tokens_rewritten = 0;
        let mut tokens_skipped = 0;
        for entry in distinct {
            match &entry.outcome {
                Ok(_) => tokens_rewritten += entry.occurrences as u64,
                Err(_) => tokens_skipped += entry.occurrences as u64,
            }
            if observe {
                self.handler.on_event(&entry.into_event());
            }
        }

        LineRewrite {
            text: Cow::Owned(out),
            tokens_rewritten,
            tokens_skipped,
        }
    }
}

/// Rewrite one line without observing events
pub fn rewrite_line(line: &[u8]) -> Cow<'_, [u8]> {
    TokenRewriter::default().rewrite(line).text
}

/// [`rewrite_line`] for text. Replacements are ASCII, so valid UTF-8 in
/// stays valid UTF-8 out.
pub fn rewrite_str(line: &str) -> Cow<'_, str> {
    match rewrite_line(line.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(line),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

// ============================================================================
// Tests
// ============================================================================
