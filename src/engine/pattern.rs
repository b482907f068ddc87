// ============================================================================
// Token Pattern
// Lexical grammar of fixed-point tokens, compiled once per process
// ============================================================================

use regex::bytes::Regex;
use std::sync::LazyLock;

/// Source of [`TOKEN_PATTERN`]: `f`, precision digits, sign tag, raw digits
pub const TOKEN_REGEX: &str = r"f([0-9]+)([ui])([0-9]+)";

/// Compiled token pattern. Matches are case-sensitive, leftmost-first and
/// non-overlapping. Operates on bytes so lines need not be UTF-8.
pub static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_REGEX).expect("token pattern is a valid regex"));

/// Whether `line` contains at least one token
#[inline]
pub fn contains_token(line: &[u8]) -> bool {
    TOKEN_PATTERN.is_match(line)
}
