// ============================================================================
// Arithmetic
// Promoting add/sub/mul/div with integer overflow detection
// ============================================================================
//
// Promotion rule (all four operators): if either operand is a Float, both are
// converted to f64 and the result is a Float. Otherwise the operation runs in
// i64 and any two's-complement wrap is reported as `Overflow`, whichever
// direction it wrapped.

use super::errors::{NumericError, NumericResult};
use super::value::{NumericValue, Promoted};
use std::ops::{Add, Div, Mul, Sub};

impl NumericValue {
    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer sum leaves the i64 range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs) {
            Promoted::Integers(a, b) => a
                .checked_add(b)
                .map(NumericValue::Integer)
                .ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(NumericValue::Float(a + b)),
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer difference leaves the i64 range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs) {
            Promoted::Integers(a, b) => a
                .checked_sub(b)
                .map(NumericValue::Integer)
                .ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(NumericValue::Float(a - b)),
        }
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer product does not fit in i64.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs) {
            Promoted::Integers(a, b) => a
                .checked_mul(b)
                .map(NumericValue::Integer)
                .ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(NumericValue::Float(a * b)),
        }
    }

    /// Checked division.
    ///
    /// The zero test uses the value's own equality, before promotion, so any
    /// divisor within `f64::EPSILON` of zero is rejected even when the
    /// dividend is an integer. Float quotients may be infinite. Integer
    /// quotients truncate toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs == 0`
    /// - `Overflow` for `i64::MIN / -1`
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.equal(&NumericValue::ZERO) {
            return Err(NumericError::DivisionByZero);
        }

        match self.promote(rhs) {
            Promoted::Integers(a, b) => a
                .checked_div(b)
                .map(NumericValue::Integer)
                .ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(NumericValue::Float(a / b)),
        }
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Add for NumericValue {
    type Output = NumericResult<NumericValue>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for NumericValue {
    type Output = NumericResult<NumericValue>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul for NumericValue {
    type Output = NumericResult<NumericValue>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl Div for NumericValue {
    type Output = NumericResult<NumericValue>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int(v: i64) -> NumericValue {
        NumericValue::from(v)
    }

    fn float(v: f64) -> NumericValue {
        NumericValue::from(v)
    }

    #[test]
    fn test_addition() {
        let c = (int(5) + int(3)).unwrap();
        assert_eq!(c.to_integer(), 8);
        assert!(!c.is_float());

        let e = (int(5) + float(2.5)).unwrap();
        assert!((e.to_float() - 7.5).abs() < 0.0001);
        assert!(e.is_float());
    }

    #[test]
    fn test_mixed_addition_promotes() {
        let sum = (int(10) + float(3.14)).unwrap();
        assert!(sum.is_float());
        assert!((sum.to_float() - 13.14).abs() < 1e-9);
    }

    #[test]
    fn test_subtraction() {
        let c = (int(10) - int(7)).unwrap();
        assert_eq!(c.to_integer(), 3);
        assert!(!c.is_float());

        let e = (int(10) - float(5.5)).unwrap();
        assert!((e.to_float() - 4.5).abs() < 0.0001);
        assert!(e.is_float());
    }

    #[test]
    fn test_multiplication() {
        let c = (int(6) * int(7)).unwrap();
        assert_eq!(c.to_integer(), 42);
        assert!(!c.is_float());

        let e = (int(6) * float(2.5)).unwrap();
        assert!((e.to_float() - 15.0).abs() < 0.0001);
        assert!(e.is_float());
    }

    #[test]
    fn test_multiplication_by_zero() {
        assert_eq!((int(0) * int(i64::MAX)).unwrap().to_integer(), 0);
        assert_eq!((int(i64::MIN) * int(0)).unwrap().to_integer(), 0);
    }

    #[test]
    fn test_division() {
        let c = (int(20) / int(4)).unwrap();
        assert_eq!(c.to_integer(), 5);
        assert!(!c.is_float());

        let e = (float(10.0) / int(4)).unwrap();
        assert!((e.to_float() - 2.5).abs() < 0.0001);
        assert!(e.is_float());

        // Integer division truncates toward zero
        assert_eq!((int(-7) / int(2)).unwrap().to_integer(), -3);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(int(42) / int(0), Err(NumericError::DivisionByZero));
        assert_eq!(int(42) / float(0.0), Err(NumericError::DivisionByZero));
        assert_eq!(int(42) / float(-0.0), Err(NumericError::DivisionByZero));
        assert_eq!(float(1.5) / int(0), Err(NumericError::DivisionByZero));

        let err = (int(20) / int(0)).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_division_by_near_zero_float() {
        // Anything within machine epsilon of zero compares equal to zero
        assert_eq!(
            int(1) / float(f64::EPSILON / 2.0),
            Err(NumericError::DivisionByZero)
        );
        assert!((int(1) / float(f64::EPSILON * 2.0)).is_ok());
    }

    #[test]
    fn test_float_division_may_be_infinite() {
        let q = (float(f64::MAX) / float(0.5)).unwrap();
        assert!(q.is_float());
        assert!(q.to_float().is_infinite());
    }

    #[test]
    fn test_add_overflow() {
        let err = (int(i64::MAX) + int(1)).unwrap_err();
        assert_eq!(err, NumericError::Overflow);
        assert_eq!(err.to_string(), "Numeric overflow");
    }

    #[test]
    fn test_negative_overflow_reports_overflow() {
        assert_eq!(int(i64::MIN) + int(-1), Err(NumericError::Overflow));
        assert_eq!(int(i64::MIN) - int(1), Err(NumericError::Overflow));
        assert_eq!(int(i64::MAX) - int(-1), Err(NumericError::Overflow));
    }

    #[test]
    fn test_wraps_at_zero_and_min_operands() {
        assert_eq!(int(i64::MIN) + int(i64::MIN), Err(NumericError::Overflow));
        assert_eq!(int(0) - int(i64::MIN), Err(NumericError::Overflow));
        assert_eq!(int(-1) - int(i64::MIN), Ok(int(i64::MAX)));
        assert_eq!((int(0) - int(i64::MAX)).unwrap().to_integer(), -i64::MAX);
    }

    #[test]
    fn test_mul_overflow() {
        assert_eq!(int(i64::MAX) * int(2), Err(NumericError::Overflow));
        assert_eq!(int(i64::MIN) * int(-1), Err(NumericError::Overflow));
        assert_eq!(int(-1) * int(i64::MIN), Err(NumericError::Overflow));
        assert_eq!(int(1 << 32) * int(1 << 31), Err(NumericError::Overflow));
        assert_eq!(
            (int(1 << 32) * int(1 << 30)).unwrap().to_integer(),
            1 << 62
        );
    }

    #[test]
    fn test_div_min_by_minus_one() {
        assert_eq!(int(i64::MIN) / int(-1), Err(NumericError::Overflow));
    }

    #[test]
    fn test_float_path_does_not_overflow() {
        let big = (float(i64::MAX as f64) + int(1)).unwrap();
        assert!(big.is_float());
    }

    #[test]
    fn test_operands_unchanged() {
        let a = int(8);
        let b = float(0.5);
        let _ = (a * b).unwrap();
        assert_eq!(a.to_integer(), 8);
        assert!(!a.is_float());
        assert_eq!(b.to_float(), 0.5);
    }

    proptest! {
        #[test]
        fn prop_integer_add_exact_or_overflow(a in any::<i64>(), b in any::<i64>()) {
            let exact = a as i128 + b as i128;
            match int(a).checked_add(int(b)) {
                Ok(sum) => {
                    prop_assert!(!sum.is_float());
                    prop_assert_eq!(sum.to_integer() as i128, exact);
                }
                Err(err) => {
                    prop_assert_eq!(err, NumericError::Overflow);
                    prop_assert!(exact > i64::MAX as i128 || exact < i64::MIN as i128);
                }
            }
        }

        #[test]
        fn prop_integer_sub_exact_or_overflow(a in any::<i64>(), b in any::<i64>()) {
            let exact = a as i128 - b as i128;
            let fits = exact >= i64::MIN as i128 && exact <= i64::MAX as i128;
            match int(a).checked_sub(int(b)) {
                Ok(diff) => {
                    prop_assert!(fits);
                    prop_assert_eq!(diff.to_integer() as i128, exact);
                }
                Err(err) => {
                    prop_assert!(!fits);
                    prop_assert_eq!(err, NumericError::Overflow);
                }
            }
        }

        #[test]
        fn prop_integer_mul_exact_or_overflow(a in any::<i64>(), b in any::<i64>()) {
            let exact = a as i128 * b as i128;
            let fits = exact >= i64::MIN as i128 && exact <= i64::MAX as i128;
            match int(a).checked_mul(int(b)) {
                Ok(product) => {
                    prop_assert!(fits);
                    prop_assert_eq!(product.to_integer() as i128, exact);
                }
                Err(err) => {
                    prop_assert!(!fits);
                    prop_assert_eq!(err, NumericError::Overflow);
                }
            }
        }

        #[test]
        fn prop_float_operand_promotes(
            a in -1.0e12f64..1.0e12,
            b in -1_000_000i64..1_000_000,
        ) {
            let lhs = float(a);
            let rhs = int(b);
            let bf = b as f64;

            let sum = lhs.checked_add(rhs).unwrap();
            let diff = rhs.checked_sub(lhs).unwrap();
            let product = lhs.checked_mul(rhs).unwrap();

            prop_assert!(sum.is_float() && diff.is_float() && product.is_float());
            prop_assert!((sum.to_float() - (a + bf)).abs() < f64::EPSILON);
            prop_assert!((diff.to_float() - (bf - a)).abs() < f64::EPSILON);
            prop_assert!((product.to_float() - (a * bf)).abs() < f64::EPSILON);

            if b != 0 {
                let quotient = lhs.checked_div(rhs).unwrap();
                prop_assert!(quotient.is_float());
                prop_assert!((quotient.to_float() - (a / bf)).abs() < f64::EPSILON);
            }
        }
    }
}
