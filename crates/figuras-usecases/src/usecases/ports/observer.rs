use crate::domain::DomainError;
use crate::domain::Operation;
use crate::usecases::session::SessionEnd;

/// Hook for session events that are not part of the transcript.
pub trait CalculationObserver {
    fn calculated(&self, _operation: &Operation, _value: f64) {}

    fn dispatch_failed(&self, _error: &DomainError) {}

    fn session_ended(&self, _end: SessionEnd, _results: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CalculationObserver for NoopObserver {}

impl<O: CalculationObserver + ?Sized> CalculationObserver for &O {
    fn calculated(&self, operation: &Operation, value: f64) {
        (**self).calculated(operation, value)
    }

    fn dispatch_failed(&self, error: &DomainError) {
        (**self).dispatch_failed(error)
    }

    fn session_ended(&self, end: SessionEnd, results: usize) {
        (**self).session_ended(end, results)
    }
}
