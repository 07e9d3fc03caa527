use thiserror::Error;

use super::operation::OperationKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Figura desconocida.")]
    UnknownShape(u8),

    #[error("Operación desconocida.")]
    UnknownOperation(u8),

    #[error("{kind} expects {expected} parameters, got {got}")]
    ParameterCount {
        kind: OperationKind,
        expected: usize,
        got: usize,
    },

    #[error("{kind} parameter '{label}' has the wrong type")]
    ParameterType {
        kind: OperationKind,
        label: &'static str,
    },

    #[error("{kind} parameter '{label}' must be greater than 0, got {value}")]
    NonPositive {
        kind: OperationKind,
        label: &'static str,
        value: f64,
    },
}
