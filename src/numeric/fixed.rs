// ============================================================================
// 32-bit Binary Fixed Point
// Raw integer storage with a compile-time split between whole and fraction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::Signedness;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compute the fractional bit count, rejecting `WHOLE_BITS > 32` at compile time
const fn frac_bits(whole_bits: u32) -> u32 {
    assert!(whole_bits <= 32, "fixed-point whole bits must be at most 32");
    32 - whole_bits
}

/// Build a [`FixedU32`] from a numeric literal, panicking if it is out of range.
///
/// ```
/// use fixlog::fixedU32;
///
/// let x = fixedU32!(16, 1.5);
/// assert_eq!(x.raw(), 98_304);
/// ```
#[macro_export]
macro_rules! fixedU32 {
    ($whole_bits:expr, $value:literal) => {
        $crate::numeric::FixedU32::<{ $whole_bits }>::from_f64($value as f64)
            .expect("fixedU32! literal out of range")
    };
}

/// Build a [`FixedI32`] from a numeric literal, panicking if it is out of range.
///
/// ```
/// use fixlog::fixedI32;
///
/// let x = fixedI32!(16, -1.5);
/// assert_eq!(x.raw(), -98_304);
/// ```
#[macro_export]
macro_rules! fixedI32 {
    ($whole_bits:expr, $value:literal) => {
        $crate::numeric::FixedI32::<{ $whole_bits }>::from_f64($value as f64)
            .expect("fixedI32! literal out of range")
    };
}

/// Token rendering of a fixed-point value in the log convention `f<N><u|i><raw>`.
///
/// Obtained from [`FixedU32::token`] or [`FixedI32::token`]. Negative signed
/// raws are written with a leading minus sign, which the rewriter does not
/// match, so such tokens stay verbatim in the filtered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenFormat {
    pub whole_bits: u32,
    pub signedness: Signedness,
    pub raw: i64,
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f{}{}{}",
            self.whole_bits,
            self.signedness.tag(),
            self.raw
        )
    }
}

// ============================================================================
// Unsigned
// ============================================================================

/// Unsigned 32-bit fixed-point number with `WHOLE_BITS` integer bits.
///
/// Stores `value × 2^(32 - WHOLE_BITS)` as a u32.
///
/// # Example
/// ```
/// use fixlog::numeric::FixedU32;
///
/// let x = FixedU32::<16>::from_f64(1.5).unwrap();
/// assert_eq!(x.raw(), 98_304);
/// assert_eq!(x.token().to_string(), "f16u98304");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedU32<const WHOLE_BITS: u32>(u32);

impl<const N: u32> FixedU32<N> {
    /// Number of fractional bits
    pub const FRAC_BITS: u32 = frac_bits(N);

    const FRAC_MASK: u64 = (1u64 << Self::FRAC_BITS) - 1;

    pub const ZERO: Self = Self(0);

    pub const MAX: Self = Self(u32::MAX);

    /// Create from the raw stored integer.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Create from a whole number.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than `WHOLE_BITS` bits.
    pub fn from_integer(whole: u32) -> NumericResult<Self> {
        let raw = (whole as u64) << Self::FRAC_BITS;
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    /// Create from a float, rounding to the nearest representable value.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinities
    /// - `Overflow` / `Underflow` if the value is outside the raw range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        let scaled = (value * (1u64 << Self::FRAC_BITS) as f64).round();
        if scaled > u32::MAX as f64 {
            Err(NumericError::Overflow)
        } else if scaled < 0.0 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(scaled as u32))
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Integer part (truncated).
    #[inline]
    pub const fn whole(self) -> u32 {
        ((self.0 as u64) >> Self::FRAC_BITS) as u32
    }

    /// Fractional part, still scaled by `2^FRAC_BITS`.
    #[inline]
    pub const fn frac(self) -> u32 {
        ((self.0 as u64) & Self::FRAC_MASK) as u32
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << Self::FRAC_BITS) as f64
    }

    /// Log token for this value, e.g. `f16u98304`.
    pub fn token(self) -> TokenFormat {
        TokenFormat {
            whole_bits: N,
            signedness: Signedness::Unsigned,
            raw: self.0 as i64,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(NumericError::Underflow)
    }

    /// Checked multiplication, truncating the extra fractional bits.
    ///
    /// Uses a u64 intermediate so the product never wraps before scaling.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = ((self.0 as u64) * (rhs.0 as u64)) >> Self::FRAC_BITS;
        u32::try_from(product)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    /// Checked division, truncating toward zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = ((self.0 as u64) << Self::FRAC_BITS) / rhs.0 as u64;
        u32::try_from(quotient)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }
}

impl<const N: u32> From<FixedU32<N>> for f64 {
    fn from(value: FixedU32<N>) -> Self {
        value.to_f64()
    }
}

/// Whole number; panics if it needs more than `WHOLE_BITS` bits.
impl<const N: u32> From<u32> for FixedU32<N> {
    fn from(whole: u32) -> Self {
        Self::from_integer(whole).expect("FixedU32 whole part overflow")
    }
}

/// Whole number; panics if it is negative or too large.
impl<const N: u32> From<i32> for FixedU32<N> {
    fn from(whole: i32) -> Self {
        let whole = u32::try_from(whole).expect("FixedU32 from negative integer");
        Self::from(whole)
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* on untrusted input)
impl<const N: u32> Add for FixedU32<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedU32 addition overflow")
    }
}

impl<const N: u32> Sub for FixedU32<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedU32 subtraction underflow")
    }
}

impl<const N: u32> Mul for FixedU32<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("FixedU32 multiplication overflow")
    }
}

impl<const N: u32> Div for FixedU32<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("FixedU32 division failed")
    }
}

impl<const N: u32> AddAssign for FixedU32<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: u32> SubAssign for FixedU32<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: u32> MulAssign for FixedU32<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: u32> DivAssign for FixedU32<N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const N: u32> fmt::Debug for FixedU32<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedU32<{}>({:?}, raw={})", N, self.to_f64(), self.0)
    }
}

impl<const N: u32> fmt::Display for FixedU32<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_f64())
    }
}

// ============================================================================
// Signed
// ============================================================================

/// Signed 32-bit fixed-point number with `WHOLE_BITS` integer bits
/// (including the sign bit).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedI32<const WHOLE_BITS: u32>(i32);

impl<const N: u32> FixedI32<N> {
    pub const FRAC_BITS: u32 = frac_bits(N);

    const FRAC_MASK: i64 = (1i64 << Self::FRAC_BITS) - 1;

    pub const ZERO: Self = Self(0);

    pub const MAX: Self = Self(i32::MAX);

    pub const MIN: Self = Self(i32::MIN);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from a whole number.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value does not fit.
    pub fn from_integer(whole: i32) -> NumericResult<Self> {
        let raw = (whole as i64) * (1i64 << Self::FRAC_BITS);
        Self::narrow(raw)
    }

    /// Create from a float, rounding to the nearest representable value.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        let scaled = (value * (1u64 << Self::FRAC_BITS) as f64).round();
        if scaled > i32::MAX as f64 {
            Err(NumericError::Overflow)
        } else if scaled < i32::MIN as f64 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(scaled as i32))
        }
    }

    #[inline]
    fn narrow(raw: i64) -> NumericResult<Self> {
        if raw > i32::MAX as i64 {
            Err(NumericError::Overflow)
        } else if raw < i32::MIN as i64 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(raw as i32))
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub const fn whole(self) -> i32 {
        ((self.0 as i64) >> Self::FRAC_BITS) as i32
    }

    /// Fractional part, always non-negative, scaled by `2^FRAC_BITS`.
    #[inline]
    pub const fn frac(self) -> u32 {
        ((self.0 as i64) & Self::FRAC_MASK) as u32
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.0
            .checked_abs()
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << Self::FRAC_BITS) as f64
    }

    /// Log token for this value, e.g. `f16i98304` or `f16i-98304`.
    pub fn token(self) -> TokenFormat {
        TokenFormat {
            whole_bits: N,
            signedness: Signedness::Signed,
            raw: self.0 as i64,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        Self::narrow(self.0 as i64 + rhs.0 as i64)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Self::narrow(self.0 as i64 - rhs.0 as i64)
    }

    /// Checked multiplication, flooring the extra fractional bits.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Self::narrow(((self.0 as i64) * (rhs.0 as i64)) >> Self::FRAC_BITS)
    }

    /// Checked division, truncating toward zero.
    ///
    /// Uses an i128 intermediate: `i32::MIN << 32` does not fit in i64.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = ((self.0 as i128) << Self::FRAC_BITS) / rhs.0 as i128;
        if quotient > i32::MAX as i128 {
            Err(NumericError::Overflow)
        } else if quotient < i32::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(quotient as i32))
        }
    }
}

impl<const N: u32> From<FixedI32<N>> for f64 {
    fn from(value: FixedI32<N>) -> Self {
        value.to_f64()
    }
}

/// Whole number; panics if it does not fit in `WHOLE_BITS` bits.
impl<const N: u32> From<i32> for FixedI32<N> {
    fn from(whole: i32) -> Self {
        Self::from_integer(whole).expect("FixedI32 whole part out of range")
    }
}

/// Whole number; panics if it does not fit in `WHOLE_BITS` bits.
impl<const N: u32> From<u32> for FixedI32<N> {
    fn from(whole: u32) -> Self {
        let whole = i32::try_from(whole).expect("FixedI32 whole part out of range");
        Self::from(whole)
    }
}

impl<const N: u32> Neg for FixedI32<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.checked_neg().expect("FixedI32 negation overflow"))
    }
}

impl<const N: u32> Add for FixedI32<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedI32 addition overflow")
    }
}

impl<const N: u32> Sub for FixedI32<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedI32 subtraction overflow")
    }
}

impl<const N: u32> Mul for FixedI32<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("FixedI32 multiplication overflow")
    }
}

impl<const N: u32> Div for FixedI32<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("FixedI32 division failed")
    }
}

impl<const N: u32> AddAssign for FixedI32<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: u32> SubAssign for FixedI32<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: u32> MulAssign for FixedI32<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: u32> DivAssign for FixedI32<N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const N: u32> fmt::Debug for FixedI32<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedI32<{}>({:?}, raw={})", N, self.to_f64(), self.0)
    }
}

impl<const N: u32> fmt::Display for FixedI32<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_f64())
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Q16.16 unsigned
pub type U16F16 = FixedU32<16>;

/// Q16.16 signed
pub type I16F16 = FixedI32<16>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(U16F16::FRAC_BITS, 16);
        assert_eq!(FixedU32::<0>::FRAC_BITS, 32);
        assert_eq!(FixedU32::<32>::FRAC_BITS, 0);
        assert_eq!(I16F16::ZERO.raw(), 0);
    }

    #[test]
    fn test_whole_and_frac() {
        let x = U16F16::from_f64(1.234).unwrap();
        assert_eq!(x.whole(), 1);
        assert_eq!(x.frac(), U16F16::from_f64(0.234).unwrap().raw());

        let all_frac = FixedU32::<0>::from_raw(u32::MAX);
        assert_eq!(all_frac.whole(), 0);
        assert_eq!(all_frac.frac(), u32::MAX);
    }

    #[test]
    fn test_signed_whole_floors() {
        let x = I16F16::from_f64(-1.5).unwrap();
        assert_eq!(x.whole(), -2);
        assert_eq!(x.frac(), 1 << 15);
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(U16F16::from_integer(3).unwrap().raw(), 3 << 16);
        assert_eq!(
            U16F16::from_integer(65_536),
            Err(NumericError::Overflow)
        );
        assert_eq!(I16F16::from_integer(-2).unwrap().raw(), -(2 << 16));
        assert_eq!(
            I16F16::from_integer(-32_769),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_from_f64_invalid() {
        assert_eq!(U16F16::from_f64(f64::NAN), Err(NumericError::NotFinite));
        assert_eq!(U16F16::from_f64(-0.5), Err(NumericError::Underflow));
        assert_eq!(U16F16::from_f64(70_000.0), Err(NumericError::Overflow));
    }

    #[test]
    fn test_add_sub() {
        let a = I16F16::from_integer(3).unwrap();
        let b = I16F16::from_f64(-1.5).unwrap();
        assert_eq!(a + b, I16F16::from_f64(1.5).unwrap());
        assert_eq!(a - b, I16F16::from_f64(4.5).unwrap());

        let max = U16F16::MAX;
        assert_eq!(
            max.checked_add(U16F16::from_raw(1)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            U16F16::ZERO.checked_sub(U16F16::from_raw(1)),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_mul() {
        let a = I16F16::from_f64(1.5).unwrap();
        let b = I16F16::from_integer(-2).unwrap();
        assert_eq!(a.checked_mul(b).unwrap(), I16F16::from_integer(-3).unwrap());

        let c = U16F16::from_f64(1.5).unwrap();
        assert_eq!(c.checked_mul(c).unwrap(), U16F16::from_f64(2.25).unwrap());

        let big = U16F16::from_integer(60_000).unwrap();
        assert_eq!(big.checked_mul(big), Err(NumericError::Overflow));
    }

    #[test]
    fn test_div() {
        let a = I16F16::from_integer(3).unwrap();
        let b = I16F16::from_integer(-2).unwrap();
        assert_eq!(a.checked_div(b).unwrap(), I16F16::from_f64(-1.5).unwrap());
        assert_eq!(
            a.checked_div(I16F16::ZERO),
            Err(NumericError::DivisionByZero)
        );

        let min = FixedI32::<0>::MIN;
        assert_eq!(
            min.checked_div(FixedI32::<0>::from_raw(1)),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_neg_and_abs() {
        let a = I16F16::from_f64(1.5).unwrap();
        let b = I16F16::from_f64(-1.5).unwrap();
        assert_eq!(-a, b);
        assert_eq!(b.abs().unwrap(), a);
        assert_eq!(I16F16::MIN.abs(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(U16F16::from_raw(32_768).to_f64(), 0.5);
        assert_eq!(FixedU32::<32>::from_raw(7).to_f64(), 7.0);
        assert_eq!(f64::from(I16F16::from_raw(-65_536)), -1.0);
    }

    #[test]
    fn test_token() {
        assert_eq!(U16F16::from_raw(32_768).token().to_string(), "f16u32768");
        assert_eq!(I16F16::from_raw(98_304).token().to_string(), "f16i98304");
        assert_eq!(I16F16::from_raw(-98_304).token().to_string(), "f16i-98304");
    }

    #[test]
    fn test_display() {
        assert_eq!(U16F16::from_raw(65_536).to_string(), "1.0");
        assert_eq!(I16F16::from_raw(-32_768).to_string(), "-0.5");
        assert_eq!(
            format!("{:?}", U16F16::from_raw(32_768)),
            "FixedU32<16>(0.5, raw=32768)"
        );
    }

    #[test]
    fn test_from_whole_numbers() {
        assert_eq!(U16F16::from(3u32), U16F16::from_integer(3).unwrap());
        assert_eq!(U16F16::from(3i32), U16F16::from_integer(3).unwrap());
        assert_eq!(I16F16::from(-2i32), I16F16::from_integer(-2).unwrap());
        assert_eq!(I16F16::from(7u32).raw(), 7 << 16);
        let x: FixedU32<8> = 200u32.into();
        assert_eq!(x.to_f64(), 200.0);
    }

    #[test]
    #[should_panic(expected = "FixedU32 whole part overflow")]
    fn test_from_whole_number_overflow_panics() {
        let _ = U16F16::from(65_536u32);
    }

    #[test]
    #[should_panic(expected = "FixedU32 from negative integer")]
    fn test_unsigned_from_negative_panics() {
        let _ = U16F16::from(-1i32);
    }

    #[test]
    fn test_mul_div_operators() {
        let a = I16F16::from_f64(1.5).unwrap();
        let b = I16F16::from(-2i32);
        assert_eq!(a * b, I16F16::from(-3i32));
        assert_eq!(I16F16::from(3i32) / b, I16F16::from_f64(-1.5).unwrap());

        let c = U16F16::from_f64(1.5).unwrap();
        assert_eq!(c * c, U16F16::from_f64(2.25).unwrap());
        assert_eq!(U16F16::from(3u32) / U16F16::from(2u32), c);
    }

    #[test]
    #[should_panic(expected = "FixedU32 multiplication overflow")]
    fn test_mul_operator_overflow_panics() {
        let big = U16F16::from(60_000u32);
        let _ = big * big;
    }

    #[test]
    #[should_panic(expected = "FixedI32 division failed")]
    fn test_div_operator_by_zero_panics() {
        let _ = I16F16::from(1i32) / I16F16::ZERO;
    }

    #[test]
    fn test_assign_operators() {
        let mut a = I16F16::from(3i32);
        let b = I16F16::from_f64(-1.5).unwrap();
        a += b;
        assert_eq!(a, I16F16::from_f64(1.5).unwrap());
        a -= b;
        assert_eq!(a, I16F16::from(3i32));
        a *= b;
        assert_eq!(a, I16F16::from_f64(-4.5).unwrap());
        a /= b;
        assert_eq!(a, I16F16::from(3i32));

        let mut u = U16F16::from(3u32);
        let two = U16F16::from(2u32);
        u += two;
        assert_eq!(u, U16F16::from(5u32));
        u -= two;
        assert_eq!(u, U16F16::from(3u32));
        u *= two;
        assert_eq!(u, U16F16::from(6u32));
        u /= two;
        assert_eq!(u, U16F16::from(3u32));
    }

    #[test]
    fn test_literal_macros() {
        assert_eq!(crate::fixedU32!(16, 1.234).whole(), 1);
        assert_eq!(crate::fixedU32!(16, 3), U16F16::from(3u32));
        assert_eq!(crate::fixedI32!(16, -1.5), I16F16::from_f64(-1.5).unwrap());
        assert_eq!(
            crate::fixedI32!(16, 3) + crate::fixedI32!(16, -1.5),
            crate::fixedI32!(16, 1.5)
        );
        assert_eq!(crate::fixedU32!(2, 0.125).token().to_string(), "f2u134217728");
    }

    #[test]
    #[should_panic(expected = "fixedU32! literal out of range")]
    fn test_literal_macro_out_of_range_panics() {
        let _ = crate::fixedU32!(16, 70_000.0);
    }
}
