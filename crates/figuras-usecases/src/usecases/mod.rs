mod dispatch;
mod input;
pub mod messages;
pub mod ports;
mod session;

pub use dispatch::{DispatchError, OperationFactory};
pub use input::{
    InputRejection, parse_menu_option, parse_non_negative_int, parse_positive_double,
    read_menu_option, read_positive_double, read_positive_int,
};
pub use session::{CalculatorSession, SessionEnd, SessionOutcome};
