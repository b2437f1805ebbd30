// ============================================================================
// Math Functions
// abs, sqrt and pow over NumericValue
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::value::NumericValue;

impl NumericValue {
    /// Get absolute value, keeping the variant.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN`, whose magnitude has no i64 form.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        match self {
            NumericValue::Integer(i) => i
                .checked_abs()
                .map(NumericValue::Integer)
                .ok_or(NumericError::Overflow),
            NumericValue::Float(f) => Ok(NumericValue::Float(f.abs())),
        }
    }

    /// Square root, always as a Float.
    ///
    /// # Errors
    /// Returns `InvalidOperation` if the value is negative.
    #[inline]
    pub fn sqrt(self) -> NumericResult<Self> {
        let value = self.to_float();
        if value < 0.0 {
            return Err(NumericError::InvalidOperation);
        }
        Ok(NumericValue::Float(value.sqrt()))
    }

    /// `self` raised to `exponent`, always as a Float.
    ///
    /// No domain checks: `0 ^ -1` is infinite and a negative base with a
    /// fractional exponent is NaN.
    #[inline]
    pub fn pow(self, exponent: Self) -> Self {
        NumericValue::Float(self.to_float().powf(exponent.to_float()))
    }
}
