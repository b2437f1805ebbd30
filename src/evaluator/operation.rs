// ============================================================================
// Operation
// A NumericValue operation together with its operands
// ============================================================================

use crate::numeric::{NumericResult, NumericValue};
use std::fmt;

/// One operation on [`NumericValue`]s, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add(NumericValue, NumericValue),
    Subtract(NumericValue, NumericValue),
    Multiply(NumericValue, NumericValue),
    Divide(NumericValue, NumericValue),
    Abs(NumericValue),
    Sqrt(NumericValue),
    Pow(NumericValue, NumericValue),
}

impl Operation {
    /// Run the operation. Errors are returned exactly as the value type
    /// signals them.
    pub fn apply(self) -> NumericResult<NumericValue> {
        match self {
            Operation::Add(a, b) => a.checked_add(b),
            Operation::Subtract(a, b) => a.checked_sub(b),
            Operation::Multiply(a, b) => a.checked_mul(b),
            Operation::Divide(a, b) => a.checked_div(b),
            Operation::Abs(a) => a.abs(),
            Operation::Sqrt(a) => a.sqrt(),
            Operation::Pow(a, b) => Ok(a.pow(b)),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add(..) => "add",
            Operation::Subtract(..) => "subtract",
            Operation::Multiply(..) => "multiply",
            Operation::Divide(..) => "divide",
            Operation::Abs(_) => "abs",
            Operation::Sqrt(_) => "sqrt",
            Operation::Pow(..) => "pow",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(a, b) => write!(f, "{} + {}", a, b),
            Operation::Subtract(a, b) => write!(f, "{} - {}", a, b),
            Operation::Multiply(a, b) => write!(f, "{} * {}", a, b),
            Operation::Divide(a, b) => write!(f, "{} / {}", a, b),
            Operation::Abs(a) => write!(f, "abs({})", a),
            Operation::Sqrt(a) => write!(f, "sqrt({})", a),
            Operation::Pow(a, b) => write!(f, "pow({}, {})", a, b),
        }
    }
}
