// ============================================================================
// fixlog Library
// Rewrites fixed-point log tokens into decimal floating-point values
// ============================================================================

//! # fixlog
//!
//! A line-oriented log filter. Firmware that logs 32-bit fixed-point values
//! writes them as tokens of the form `f<Q><S><V>`:
//!
//! - `Q`: whole bits of the fixed-point type
//! - `S`: `u` or `i`, a sign tag that does not affect the conversion
//! - `V`: the raw stored integer
//!
//! The filter replaces each token with `V / 2^(32 - Q)` rendered as a
//! decimal, leaving every other byte of the line untouched.
//!
//! ## Example
//!
//! ```rust
//! use fixlog::prelude::*;
//! use fixlog::numeric::U16F16;
//!
//! // Rewrite a single line
//! assert_eq!(rewrite_str("value=f16u65536 other=f16u32768"), "value=1.0 other=0.5");
//!
//! // Produce a token the way firmware would, then decode it
//! let speed = U16F16::from_f64(2.75).unwrap();
//! let line = format!("speed={}\n", speed.token());
//! assert_eq!(rewrite_str(&line), "speed=2.75\n");
//!
//! // Stream lines through a filter
//! let filter = LineFilter::new(FilterConfig::new(), TokenRewriter::default()).unwrap();
//! let mut out = Vec::new();
//! let summary = filter
//!     .run(&mut "a=f0i0\nb\n".as_bytes(), &mut out, &InputSource::Stdin)
//!     .unwrap();
//! assert_eq!(out, b"a=0.0\nb\n");
//! assert_eq!(summary.lines, 2);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        FilterConfig, FilterSummary, FixedToken, InputSource, RawMagnitude, Signedness,
        TokenError,
    };
    pub use crate::engine::{
        rewrite_line, rewrite_str, FilterError, FilterResult, LineFilter, LineRewrite,
        TokenRewriter,
    };
    pub use crate::interfaces::{
        LoggingRewriteHandler, NoOpRewriteHandler, RewriteEvent, RewriteHandler,
    };
}
