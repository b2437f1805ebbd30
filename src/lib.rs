// ============================================================================
// Auto Numeric Library
// One value type for integer and floating-point readings
// ============================================================================

//! # Auto Numeric
//!
//! A numeric value that is either a 64-bit integer or a 64-bit float, with
//! the bookkeeping done for you.
//!
//! ## Features
//!
//! - **Automatic promotion**: any float operand makes the operation float
//! - **Overflow detection** on the integer path
//! - **Checked math**: division, square root and power return `Result`
//! - **Event reporting** of failed operations through `tracing`
//!
//! ## Example
//!
//! ```rust
//! use auto_numeric::prelude::*;
//!
//! let a = NumericValue::from(10);
//! let b = NumericValue::from(3.14);
//!
//! let sum = (a + b).unwrap();
//! assert!(sum.is_float());
//!
//! let quotient = (NumericValue::from(20) / NumericValue::from(4)).unwrap();
//! assert_eq!(quotient.to_integer(), 5);
//! assert!(!quotient.is_float());
//!
//! let err = (NumericValue::from(42) / NumericValue::from(0)).unwrap_err();
//! assert_eq!(err.to_string(), "Division by zero");
//! ```

pub mod config;
pub mod evaluator;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{FloatStyle, RenderConfig};
    pub use crate::evaluator::{create_from_config, Evaluator, EvaluatorBuilder, Operation};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, NumericEvent, RecordingEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericKind, NumericResult, NumericValue};
}
