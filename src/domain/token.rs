// ============================================================================
// Fixed-Point Token Model
// The parsed form of an `f<Q><S><V>` log token and its decimal value
// ============================================================================

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors for tokens that match the lexical pattern but have no decimal value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Text is not of the form `f<digits><u|i><digits>`
    #[error("malformed fixed-point token: {0:?}")]
    Malformed(String),
    /// Value overflows a double
    #[error("value of {token} is not representable as a finite double")]
    NotFinite { token: String },
}

/// Sign tag of a token. Informational only: it never changes the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Signedness {
    /// `u`
    Unsigned,
    /// `i`
    Signed,
}

impl Signedness {
    pub const fn tag(self) -> char {
        match self {
            Signedness::Unsigned => 'u',
            Signedness::Signed => 'i',
        }
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'u' => Some(Signedness::Unsigned),
            b'i' => Some(Signedness::Signed),
            _ => None,
        }
    }
}

/// Raw stored integer `V` of a token. Any number of digits is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawMagnitude {
    Exact(u64),
    /// Wider than 64 bits, held as decimal digits without leading zeros
    Wide(Box<str>),
}

impl RawMagnitude {
    /// Parse a non-empty run of ASCII digits.
    fn from_digits(digits: &[u8]) -> Self {
        if let Some(raw) = parse_u64(digits) {
            return RawMagnitude::Exact(raw);
        }
        let start = digits.iter().position(|&d| d != b'0').unwrap_or(digits.len());
        let digits: String = digits[start..].iter().map(|&d| char::from(d)).collect();
        RawMagnitude::Wide(digits.into_boxed_str())
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            RawMagnitude::Exact(raw) => Some(*raw),
            RawMagnitude::Wide(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, RawMagnitude::Exact(0))
    }

    /// `self / 2^frac_bits`, correctly rounded to a double. Infinite when
    /// the quotient overflows.
    fn scaled(&self, frac_bits: i64) -> f64 {
        match (self, u32::try_from(frac_bits)) {
            // frac_bits <= 32, the divisor is exact
            (RawMagnitude::Exact(raw), Ok(k)) => *raw as f64 / (1u64 << k) as f64,
            // V / 2^k == V * 5^k / 10^k, so the decimal parser rounds once
            (RawMagnitude::Wide(digits), Ok(k)) => {
                let scaled = mul_decimal(digits, 5u128.pow(k));
                format!("{scaled}e-{k}").parse().unwrap_or(f64::NAN)
            },
            (raw, Err(_)) => {
                let scale = i32::try_from(-frac_bits).unwrap_or(i32::MAX);
                let raw = match raw {
                    RawMagnitude::Exact(raw) => *raw as f64,
                    RawMagnitude::Wide(digits) => digits.parse().unwrap_or(f64::NAN),
                };
                raw * 2f64.powi(scale)
            },
        }
    }
}

impl From<u64> for RawMagnitude {
    fn from(raw: u64) -> Self {
        RawMagnitude::Exact(raw)
    }
}

impl fmt::Display for RawMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawMagnitude::Exact(raw) => write!(f, "{}", raw),
            RawMagnitude::Wide(digits) => f.write_str(digits),
        }
    }
}

/// A fixed-point token `f<Q><S><V>` found in a log line.
///
/// `whole_bits` is `Q`, `raw` is `V`. The decimal value is `V / 2^(32 - Q)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedToken {
    pub whole_bits: u32,
    pub signedness: Signedness,
    pub raw: RawMagnitude,
}

/// Parse ASCII digits, saturating at `u32::MAX`.
///
/// Any `Q` past a few thousand already scales a non-zero raw beyond a
/// double, so saturation does not change the result.
fn parse_saturating_u32(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}

fn parse_u64(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}

/// Multiply a decimal digit string by `factor` (at most `5^32`).
fn mul_decimal(digits: &str, factor: u128) -> String {
    let mut reversed = Vec::with_capacity(digits.len() + 24);
    let mut carry = 0u128;
    for d in digits.bytes().rev() {
        let acc = u128::from(d - b'0') * factor + carry;
        reversed.push((acc % 10) as u8);
        carry = acc / 10;
    }
    while carry > 0 {
        reversed.push((carry % 10) as u8);
        carry /= 10;
    }
    reversed.iter().rev().map(|d| char::from(b'0' + d)).collect()
}

fn is_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

impl FixedToken {
    pub const fn new(whole_bits: u32, signedness: Signedness, raw: u64) -> Self {
        Self {
            whole_bits,
            signedness,
            raw: RawMagnitude::Exact(raw),
        }
    }

    /// Build a token from the three captured parts of a pattern match.
    ///
    /// # Errors
    /// Returns `Malformed` if a part is not what the pattern guarantees.
    pub fn from_parts(whole_bits: &[u8], tag: u8, raw: &[u8]) -> Result<Self, TokenError> {
        let malformed = || {
            let mut text = String::from("f");
            text.push_str(&String::from_utf8_lossy(whole_bits));
            text.push(char::from(tag));
            text.push_str(&String::from_utf8_lossy(raw));
            TokenError::Malformed(text)
        };

        if !is_digits(whole_bits) || !is_digits(raw) {
            return Err(malformed());
        }
        let signedness = Signedness::from_tag(tag).ok_or_else(malformed)?;

        Ok(Self {
            whole_bits: parse_saturating_u32(whole_bits),
            signedness,
            raw: RawMagnitude::from_digits(raw),
        })
    }

    /// Number of fractional bits, `32 - Q`. Negative when `Q > 32`.
    #[inline]
    pub fn frac_bits(&self) -> i64 {
        32 - i64::from(self.whole_bits)
    }

    /// Decimal value `V / 2^(32 - Q)`.
    ///
    /// The result is correctly rounded for every `V`, including raws wider
    /// than 64 bits.
    ///
    /// # Errors
    /// Returns `NotFinite` when the value overflows a double.
    pub fn value(&self) -> Result<f64, TokenError> {
        if self.raw.is_zero() {
            return Ok(0.0);
        }

        let value = self.raw.scaled(self.frac_bits());
        if value.is_finite() {
            Ok(value)
        } else {
            Err(TokenError::NotFinite {
                token: self.to_string(),
            })
        }
    }

    /// Decimal text the token is rewritten to: shortest round-trip form,
    /// always with a fractional part or exponent (`0.5`, `1.0`, `1e16`).
    pub fn render(&self) -> Result<String, TokenError> {
        self.value().map(|value| format!("{:?}", value))
    }
}

impl fmt::Display for FixedToken {
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

impl FromStr for FixedToken {
    type Err = TokenError;

    /// Parse a complete token, e.g. `"f16u32768"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TokenError::Malformed(s.to_string());

        let body = s.strip_prefix('f').ok_or_else(malformed)?.as_bytes();
        let tag_pos = body
            .iter()
            .position(|b| !b.is_ascii_digit())
            .ok_or_else(malformed)?;

        Self::from_parts(&body[..tag_pos], body[tag_pos], &body[tag_pos + 1..])
            .map_err(|e| match e {
                TokenError::Malformed(_) => malformed(),
                other => other,
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
