// ============================================================================
// Numeric Module
// 32-bit binary fixed point, the producer side of the log token convention
// ============================================================================
//
// This module provides:
// - FixedU32<N> / FixedI32<N>: raw u32/i32 with N whole bits, 32 - N fraction bits
// - TokenFormat: the `f<N><u|i><raw>` rendering that firmware writes into logs
// - NumericError: Error types for checked arithmetic
//
// Design principles:
// - Checked arithmetic returns Result; only the operator impls panic
// - Wide intermediates (u64/i64/i128) so products and quotients never wrap
// - Compile-time split between whole and fraction bits via const generics

mod errors;
mod fixed;

pub use errors::{NumericError, NumericResult};
pub use fixed::{FixedI32, FixedU32, I16F16, TokenFormat, U16F16};
