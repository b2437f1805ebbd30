// ============================================================================
// Numeric Module
// Integer/float unified value type with checked arithmetic
// ============================================================================
//
// This module provides:
// - NumericValue: Integer(i64) | Float(f64) with automatic promotion
// - NumericError: Error kinds for failed operations
//
// Design principles:
// - Immutable, Copy values; operations return new values
// - All fallible operations return Result (no panics)
// - Any Float operand promotes the whole operation to f64
// - Comparisons derive from a single equal/less_than pair

mod arithmetic;
mod compare;
mod errors;
mod math;
mod value;

pub use errors::{NumericError, NumericResult};
pub use value::{NumericKind, NumericValue};
