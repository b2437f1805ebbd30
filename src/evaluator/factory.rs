// ============================================================================
// Evaluator Factory
// Creates evaluators with validated configuration
// ============================================================================

use super::Evaluator;
use crate::config::{FloatStyle, RenderConfig};
use crate::interfaces::{EventHandler, LoggingEventHandler};
use std::sync::Arc;

/// Creates an evaluator from configuration
///
/// # Example
/// ```
/// use auto_numeric::prelude::*;
/// use auto_numeric::evaluator::create_from_config;
/// use std::sync::Arc;
///
/// let evaluator = create_from_config(RenderConfig::compact(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(evaluator.render(&NumericValue::from(0.25)), "0.2500");
/// ```
pub fn create_from_config(
    config: RenderConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Evaluator, String> {
    config.validate()?;
    Ok(Evaluator::with_config(event_handler, config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating evaluators with fluent API
///
/// # Example
/// ```
/// use auto_numeric::prelude::*;
///
/// let evaluator = EvaluatorBuilder::new()
///     .with_float_precision(3)
///     .scientific()
///     .logging()
///     .build()
///     .unwrap();
///
/// assert_eq!(evaluator.render(&NumericValue::from(1500.0)), "1.500e3");
/// ```
pub struct EvaluatorBuilder {
    config: RenderConfig,
    event_handler: Option<Arc<dyn EventHandler>>,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
            event_handler: None,
        }
    }

    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.config = self.config.with_float_precision(precision);
        self
    }

    /// Render floats in positional notation (default)
    pub fn fixed(mut self) -> Self {
        self.config = self.config.with_float_style(FloatStyle::Fixed);
        self
    }

    /// Render floats in exponent notation
    pub fn scientific(mut self) -> Self {
        self.config = self.config.with_float_style(FloatStyle::Scientific);
        self
    }

    pub fn with_event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = Some(handler);
        self
    }

    /// Report events through `tracing`
    pub fn logging(self) -> Self {
        self.with_event_handler(Arc::new(LoggingEventHandler))
    }

    /// Build the evaluator. Without an explicit handler, events are logged.
    pub fn build(self) -> Result<Evaluator, String> {
        let handler = self
            .event_handler
            .unwrap_or_else(|| Arc::new(LoggingEventHandler));
        create_from_config(self.config, handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
