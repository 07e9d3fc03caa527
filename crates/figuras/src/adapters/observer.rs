use figuras_domain::DomainError;
use figuras_domain::Operation;
use figuras_usecases::SessionEnd;
use figuras_usecases::ports::CalculationObserver;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Sends session events to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CalculationObserver for TracingObserver {
    fn calculated(&self, operation: &Operation, value: f64) {
        debug!(kind = %operation.kind(), ?operation, value, "Operation calculated");
    }

    fn dispatch_failed(&self, error: &DomainError) {
        warn!(error = ?error, "Operation dispatch failed");
    }

    fn session_ended(&self, end: SessionEnd, results: usize) {
        info!(end = end.as_str(), results, "Session ended");
    }
}
