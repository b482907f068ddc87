// ============================================================================
// Rewrite Handler Interface
// Defines the contract for observing token substitutions
// ============================================================================

use crate::domain::{FixedToken, TokenError};

/// Events emitted by the token rewriter, once per distinct token literal
/// in a line
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteEvent {
    /// Every occurrence of `literal` was replaced by `replacement`
    TokenRewritten {
        literal: String,
        token: FixedToken,
        replacement: String,
        occurrences: usize,
    },

    /// `literal` matched the token pattern but was left verbatim
    TokenSkipped {
        literal: String,
        error: TokenError,
        occurrences: usize,
    },
}

/// Handler trait for rewrite events
/// Implementations can handle logging, statistics, auditing, etc.
pub trait RewriteHandler {
    /// Handle a rewrite event
    fn on_event(&self, event: &RewriteEvent);

    /// Whether the rewriter should build events for this handler at all
    fn wants_events(&self) -> bool {
        true
    }
}

/// No-op handler for tests and benchmarks
pub struct NoOpRewriteHandler;

impl RewriteHandler for NoOpRewriteHandler {
    fn on_event(&self, _event: &RewriteEvent) {
        // Do nothing
    }

    fn wants_events(&self) -> bool {
        false
    }
}

/// Logging handler: substitutions at trace level, skipped tokens as warnings
pub struct LoggingRewriteHandler;

impl RewriteHandler for LoggingRewriteHandler {
    fn on_event(&self, event: &RewriteEvent) {
        match event {
            RewriteEvent::TokenRewritten {
                literal,
                replacement,
                occurrences,
                ..
            } => {
                tracing::trace!(%literal, %replacement, occurrences, "rewrote fixed-point token");
            },
            RewriteEvent::TokenSkipped {
                literal, error, ..
            } => {
                tracing::warn!(%literal, %error, "left fixed-point token unchanged");
            },
        }
    }
}
