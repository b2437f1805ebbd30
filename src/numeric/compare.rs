// ============================================================================
// Comparison
// Promoting equality/ordering built on a single `equal`/`less_than` pair
// ============================================================================

use super::value::{NumericValue, Promoted};
use std::cmp::Ordering;

impl NumericValue {
    /// Equality under promotion.
    ///
    /// Integers compare exactly. When either side is a Float the values are
    /// equal iff their f64 views differ by less than `f64::EPSILON`, so this
    /// relation is not transitive near the tolerance.
    #[inline]
    pub fn equal(&self, other: &Self) -> bool {
        match self.promote(*other) {
            Promoted::Integers(a, b) => a == b,
            Promoted::Floats(a, b) => (a - b).abs() < f64::EPSILON,
        }
    }

    /// Strict ordering under promotion.
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        match self.promote(*other) {
            Promoted::Integers(a, b) => a < b,
            Promoted::Floats(a, b) => a < b,
        }
    }

    // The remaining relations are derived from `equal`/`less_than` only.

    #[inline]
    pub fn not_equal(&self, other: &Self) -> bool {
        !self.equal(other)
    }

    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        other.less_than(self)
    }

    #[inline]
    pub fn less_or_equal(&self, other: &Self) -> bool {
        !other.less_than(self)
    }

    #[inline]
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        !self.less_than(other)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for NumericValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

/// The comparison operators route to the derived relations above. With a NaN
/// operand `<=` and `>=` therefore report `true` while `partial_cmp` returns
/// `None`.
impl PartialOrd for NumericValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.equal(other) {
            Some(Ordering::Equal)
        } else if self.less_than(other) {
            Some(Ordering::Less)
        } else if self.greater_than(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.less_than(other)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.less_or_equal(other)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.greater_than(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.greater_or_equal(other)
    }
}
