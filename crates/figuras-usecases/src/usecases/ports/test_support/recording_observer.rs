use std::sync::Mutex;

use crate::domain::DomainError;
use crate::domain::Operation;
use crate::usecases::ports::CalculationObserver;
use crate::usecases::session::SessionEnd;

#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    Calculated { operation: Operation, value: f64 },
    DispatchFailed(DomainError),
    SessionEnded { end: SessionEnd, results: usize },
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ObservedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl CalculationObserver for RecordingObserver {
    fn calculated(&self, operation: &Operation, value: f64) {
        self.record(ObservedEvent::Calculated {
            operation: *operation,
            value,
        });
    }

    fn dispatch_failed(&self, error: &DomainError) {
        self.record(ObservedEvent::DispatchFailed(error.clone()));
    }

    fn session_ended(&self, end: SessionEnd, results: usize) {
        self.record(ObservedEvent::SessionEnded { end, results });
    }
}
