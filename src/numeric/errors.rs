// ============================================================================
// Numeric Errors
// Error kinds signaled by NumericValue operations
// ============================================================================

use std::fmt;

/// Errors that can occur during NumericValue operations.
///
/// The message strings are part of the public contract and are matched
/// verbatim by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Integer result wrapped past the i64 range (either direction)
    Overflow,
    /// Reserved; integer arithmetic reports both directions as `Overflow`
    Underflow,
    /// Divisor compared equal to zero
    DivisionByZero,
    /// Operation undefined for the operand (e.g. square root of a negative)
    InvalidOperation,
}

impl NumericError {
    /// Every error kind, in declaration order.
    pub const ALL: [NumericError; 4] = [
        NumericError::Overflow,
        NumericError::Underflow,
        NumericError::DivisionByZero,
        NumericError::InvalidOperation,
    ];

    /// Fixed human-readable message for this kind.
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            NumericError::Overflow => "Numeric overflow",
            NumericError::Underflow => "Numeric underflow",
            NumericError::DivisionByZero => "Division by zero",
            NumericError::InvalidOperation => "Invalid operation",
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
