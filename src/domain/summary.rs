// ============================================================================
// Filter Summary
// Counters accumulated over one filter run
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a filter run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterSummary {
    /// Lines read and written
    pub lines: u64,
    /// Token occurrences replaced by a decimal value
    pub tokens_rewritten: u64,
    /// Token occurrences left verbatim because they have no finite value
    pub tokens_skipped: u64,
}

impl FilterSummary {
    /// Fold another run's counters into this one
    pub fn merge(&mut self, other: FilterSummary) {
        self.lines += other.lines;
        self.tokens_rewritten += other.tokens_rewritten;
        self.tokens_skipped += other.tokens_skipped;
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
