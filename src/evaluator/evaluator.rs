// ============================================================================
// Evaluator
// Applies operations and reports the outcome to an event handler
// ============================================================================

use super::Operation;
use crate::config::RenderConfig;
use crate::interfaces::{EventHandler, NumericEvent};
use crate::numeric::{NumericResult, NumericValue};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Runs [`Operation`]s on behalf of a caller that wants failures observed.
///
/// The evaluator never recovers from an error: every result is handed back
/// unchanged after the event handler has seen it.
pub struct Evaluator {
    /// Event handler for evaluated/failed operations
    event_handler: Arc<dyn EventHandler>,

    /// Options used by `render`
    render_config: RenderConfig,

    /// Number of operations applied
    evaluated: AtomicU64,

    /// Number of operations that signaled an error
    failed: AtomicU64,
}

impl Evaluator {
    /// Create a new evaluator with the default render configuration
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self::with_config(event_handler, RenderConfig::default())
    }

    pub fn with_config(event_handler: Arc<dyn EventHandler>, render_config: RenderConfig) -> Self {
        Self {
            event_handler,
            render_config,
            evaluated: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Apply one operation
    pub fn evaluate(&self, operation: Operation) -> NumericResult<NumericValue> {
        let result = operation.apply();
        self.event_handler.on_event(self.record(operation, &result));
        result
    }

    /// Apply several operations, reporting their events as one batch
    pub fn evaluate_all<I>(&self, operations: I) -> Vec<NumericResult<NumericValue>>
    where
        I: IntoIterator<Item = Operation>,
    {
        let mut events = Vec::new();
        let results = operations
            .into_iter()
            .map(|operation| {
                let result = operation.apply();
                events.push(self.record(operation, &result));
                result
            })
            .collect();

        self.event_handler.on_events(events);
        results
    }

    /// Render a value with this evaluator's configuration
    pub fn render(&self, value: &NumericValue) -> String {
        value.render(&self.render_config)
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Operations applied so far
    pub fn evaluated_count(&self) -> u64 {
        self.evaluated.load(Ordering::Acquire)
    }

    /// Operations that failed so far
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Acquire)
    }

    fn record(&self, operation: Operation, result: &NumericResult<NumericValue>) -> NumericEvent {
        self.evaluated.fetch_add(1, Ordering::AcqRel);
        match *result {
            Ok(value) => NumericEvent::Evaluated {
                operation,
                result: value,
            },
            Err(error) => {
                self.failed.fetch_add(1, Ordering::AcqRel);
                NumericEvent::Failed { operation, error }
            },
        }
    }
}
