// ============================================================================
// Evaluator Module
// Operation dispatch with event reporting
// ============================================================================

pub mod factory;
mod operation;

#[allow(clippy::module_inception)]
mod evaluator;

pub use evaluator::Evaluator;
pub use factory::{create_from_config, EvaluatorBuilder};
pub use operation::Operation;
