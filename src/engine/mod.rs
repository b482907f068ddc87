// ============================================================================
// Engine Module
// Token matching, line rewriting and the streaming filter loop
// ============================================================================

mod error;
mod line_filter;
mod rewriter;

pub mod pattern;

pub use error::{FilterError, FilterResult};
pub use line_filter::LineFilter;
pub use pattern::{contains_token, TOKEN_PATTERN};
pub use rewriter::{rewrite_line, rewrite_str, LineRewrite, TokenRewriter};
