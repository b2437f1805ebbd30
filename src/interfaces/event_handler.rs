// ============================================================================
// Event Handler Interface
// Defines the contract for observing evaluated and failed operations
// ============================================================================

use crate::evaluator::Operation;
use crate::numeric::{NumericError, NumericValue};
use parking_lot::Mutex;

/// Events emitted by the evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericEvent {
    /// Operation produced a value
    Evaluated {
        operation: Operation,
        result: NumericValue,
    },

    /// Operation signaled an error
    Failed {
        operation: Operation,
        error: NumericError,
    },
}

impl NumericEvent {
    pub fn operation(&self) -> Operation {
        match self {
            NumericEvent::Evaluated { operation, .. } | NumericEvent::Failed { operation, .. } => {
                *operation
            },
        }
    }

    pub fn error(&self) -> Option<NumericError> {
        match self {
            NumericEvent::Failed { error, .. } => Some(*error),
            NumericEvent::Evaluated { .. } => None,
        }
    }
}

/// Event handler trait for processing evaluator events
/// Implementations can handle logging, display, recording, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: NumericEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<NumericEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: NumericEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: NumericEvent) {
        match event {
            NumericEvent::Evaluated { operation, result } => {
                tracing::debug!(op = operation.name(), %operation, %result, "evaluated");
            },
            NumericEvent::Failed { operation, error } => {
                tracing::warn!(
                    op = operation.name(),
                    %operation,
                    kind = ?error,
                    "{}",
                    error
                );
            },
        }
    }
}

/// Keeps every event in memory so callers can inspect failures afterwards
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<NumericEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, oldest first
    pub fn events(&self) -> Vec<NumericEvent> {
        self.events.lock().clone()
    }

    /// Recorded failures only
    pub fn failures(&self) -> Vec<(Operation, NumericError)> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| e.error().map(|err| (e.operation(), err)))
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: NumericEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<NumericEvent>) {
        self.events.lock().extend(events);
    }
}
