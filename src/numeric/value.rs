// ============================================================================
// Numeric Value
// Integer/float sum type with automatic promotion
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::config::{FloatStyle, RenderConfig};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;

/// A number that is either a 64-bit signed integer or a 64-bit float.
///
/// Values are immutable; every operation returns a new `NumericValue`.
/// Mixed operations promote to `Float` (see [`NumericValue::checked_add`]).
///
/// # Example
/// ```
/// use auto_numeric::numeric::NumericValue;
///
/// let a = NumericValue::from(10);
/// let b = NumericValue::from(3.14);
/// let sum = (a + b).unwrap();
/// assert!(sum.is_float());
/// assert!((sum.to_float() - 13.14).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum NumericValue {
    /// 64-bit signed integer payload
    Integer(i64),
    /// 64-bit IEEE-754 payload
    Float(f64),
}

/// Discriminant of a [`NumericValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    Float,
}

/// Operand pair after promotion.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Promoted {
    Integers(i64, i64),
    Floats(f64, f64),
}

impl NumericValue {
    /// Integer zero
    pub const ZERO: Self = NumericValue::Integer(0);

    /// Integer one
    pub const ONE: Self = NumericValue::Integer(1);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Which payload this value carries.
    #[inline]
    pub const fn kind(&self) -> NumericKind {
        match self {
            NumericValue::Integer(_) => NumericKind::Integer,
            NumericValue::Float(_) => NumericKind::Float,
        }
    }

    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, NumericValue::Float(_))
    }

    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(self, NumericValue::Integer(_))
    }

    /// Integer view of the value.
    ///
    /// Floats are truncated toward zero. Out-of-range floats saturate at the
    /// i64 bounds and NaN reads as 0.
    #[inline]
    pub fn to_integer(&self) -> i64 {
        match *self {
            NumericValue::Integer(i) => i,
            NumericValue::Float(f) => f as i64,
        }
    }

    /// Float view of the value (nearest double for large integers).
    #[inline]
    pub fn to_float(&self) -> f64 {
        match *self {
            NumericValue::Integer(i) => i as f64,
            NumericValue::Float(f) => f,
        }
    }

    /// Pair `self` with `rhs` under the promotion rule: any float operand
    /// moves both into f64.
    #[inline]
    pub(crate) fn promote(self, rhs: Self) -> Promoted {
        match (self, rhs) {
            (NumericValue::Integer(a), NumericValue::Integer(b)) => Promoted::Integers(a, b),
            _ => Promoted::Floats(self.to_float(), rhs.to_float()),
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render with explicit formatting options.
    ///
    /// Integers are always printed as plain decimals; the config only affects
    /// the float payload.
    pub fn render(&self, config: &RenderConfig) -> String {
        match *self {
            NumericValue::Integer(i) => i.to_string(),
            NumericValue::Float(f) => match config.float_style {
                FloatStyle::Fixed => format!("{:.*}", config.float_precision, f),
                FloatStyle::Scientific => format!("{:.*e}", config.float_precision, f),
            },
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Default for NumericValue {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for NumericValue {
                #[inline]
                fn from(value: $t) -> Self {
                    NumericValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for NumericValue {
    #[inline]
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        NumericValue::Integer(value as i64)
    }
}

impl TryFrom<u64> for NumericValue {
    type Error = NumericError;

    /// # Errors
    /// Returns `Overflow` for values above `i64::MAX`.
    #[inline]
    fn try_from(value: u64) -> NumericResult<Self> {
        i64::try_from(value)
            .map(NumericValue::Integer)
            .map_err(|_| NumericError::Overflow)
    }
}

impl TryFrom<usize> for NumericValue {
    type Error = NumericError;

    #[inline]
    fn try_from(value: usize) -> NumericResult<Self> {
        i64::try_from(value)
            .map(NumericValue::Integer)
            .map_err(|_| NumericError::Overflow)
    }
}

impl From<f32> for NumericValue {
    #[inline]
    fn from(value: f32) -> Self {
        NumericValue::Float(f64::from(value))
    }
}

impl From<f64> for NumericValue {
    #[inline]
    fn from(value: f64) -> Self {
        NumericValue::Float(value)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NumericValue::Integer(i) => write!(f, "{}", i),
            NumericValue::Float(v) => {
                write!(f, "{:.*}", RenderConfig::DEFAULT_FLOAT_PRECISION, v)
            },
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl NumericValue {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Integral decimals that fit in i64 become `Integer`; everything else
    /// becomes the nearest `Float`. The whole Decimal range (about ±7.9e28)
    /// lies inside f64, so the conversion cannot fail.
    pub fn from_decimal(d: Decimal) -> Self {
        if d.fract().is_zero() {
            if let Some(i) = d.to_i64() {
                return NumericValue::Integer(i);
            }
        }

        NumericValue::Float(d.to_f64().unwrap_or(f64::NAN))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Returns `None` for NaN, infinities and floats outside the Decimal range.
    pub fn to_decimal(self) -> Option<Decimal> {
        match self {
            NumericValue::Integer(i) => Some(Decimal::from(i)),
            NumericValue::Float(f) => Decimal::from_f64(f),
        }
    }
}
