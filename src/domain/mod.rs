// ============================================================================
// Domain Models Module
// Tokens, run configuration and run counters
// ============================================================================

pub mod config;
pub mod summary;
pub mod token;

pub use config::{FilterConfig, InputSource};
pub use summary::FilterSummary;
pub use token::{FixedToken, RawMagnitude, Signedness, TokenError};
