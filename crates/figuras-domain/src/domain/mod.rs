//! Domain layer: shapes, operations and their formulas.

mod error;
mod operation;
mod result_log;
mod shape;

pub use error::DomainError;
pub use operation::CIRCLE_PI;
pub use operation::Calculate;
pub use operation::Operation;
pub use operation::OperationKind;
pub use operation::Parameter;
pub use operation::ParameterKind;
pub use operation::ParameterValue;
pub use operation::power;
pub use result_log::ResultLog;
pub use shape::OperationChoice;
pub use shape::Shape;
