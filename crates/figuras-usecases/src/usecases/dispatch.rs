//! Operation dispatch: menu choices in, a ready-to-run operation out.

use thiserror::Error;

use crate::domain::DomainError;
use crate::domain::Operation;
use crate::domain::OperationKind;
use crate::domain::ParameterKind;
use crate::domain::ParameterValue;
use crate::usecases::input::read_positive_double;
use crate::usecases::input::read_positive_int;
use crate::usecases::ports::Console;
use crate::usecases::ports::ConsoleError;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

pub struct OperationFactory;

impl OperationFactory {
    /// Resolves the choices and reads the operation's parameters from `console`.
    ///
    /// Choosing Power (3) skips the shape entirely. Unknown selectors fail
    /// before anything is read.
    pub fn create<C: Console + ?Sized>(
        shape_choice: u8,
        operation_choice: u8,
        console: &mut C,
    ) -> Result<Operation, DispatchError> {
        let kind = OperationKind::resolve(shape_choice, operation_choice)?;
        Self::build(kind, console)
    }

    pub fn build<C: Console + ?Sized>(
        kind: OperationKind,
        console: &mut C,
    ) -> Result<Operation, DispatchError> {
        let params = kind.parameters();
        let mut values = Vec::with_capacity(params.len());
        for param in params {
            console.write_line(param.label)?;
            let value = match param.kind {
                ParameterKind::PositiveReal => ParameterValue::Real(read_positive_double(console)?),
                ParameterKind::NonNegativeInteger => {
                    ParameterValue::Integer(read_positive_int(console)?)
                }
            };
            values.push(value);
        }
        Ok(Operation::from_values(kind, &values)?)
    }
}
