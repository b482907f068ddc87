// ============================================================================
// Numeric Errors
// Error types for 32-bit fixed-point arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the 32-bit raw range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below the 32-bit raw range
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Float input was NaN or infinite
    #[error("invalid input: value is not a finite number")]
    NotFinite,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::NotFinite.to_string(),
            "invalid input: value is not a finite number"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }
}
