//! The interactive menu loop.

use crate::common::format_float;
use crate::domain::Calculate;
use crate::domain::OperationChoice;
use crate::domain::ResultLog;
use crate::domain::Shape;
use crate::usecases::dispatch::DispatchError;
use crate::usecases::dispatch::OperationFactory;
use crate::usecases::input::read_menu_option;
use crate::usecases::messages;
use crate::usecases::ports::CalculationObserver;
use crate::usecases::ports::Console;
use crate::usecases::ports::ConsoleError;

const SHAPE_MENU_MAX: u8 = 5;
const OPERATION_MENU_MAX: u8 = 3;
const EXIT: u8 = 0;
const BACK: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Salir".
    Exit,
    /// Input ran out at a prompt.
    InputClosed,
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEnd::Exit => "exit",
            SessionEnd::InputClosed => "input_closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub results: ResultLog,
    pub end: SessionEnd,
}

pub struct CalculatorSession<C: Console, O: CalculationObserver> {
    console: C,
    observer: O,
    results: ResultLog,
}

impl<C: Console, O: CalculationObserver> CalculatorSession<C, O> {
    pub fn new(console: C, observer: O) -> Self {
        Self {
            console,
            observer,
            results: ResultLog::new(),
        }
    }

    /// Runs until the user exits or input ends, then prints the stored results.
    ///
    /// Only console I/O failures are returned as errors; bad input never is.
    pub fn run(mut self) -> Result<SessionOutcome, ConsoleError> {
        let end = match self.menu_loop() {
            Ok(()) => SessionEnd::Exit,
            Err(ConsoleError::Closed) => {
                // Finish the dangling prompt line.
                self.console.write_line("")?;
                SessionEnd::InputClosed
            }
            Err(err) => return Err(err),
        };

        self.print_results()?;
        self.observer.session_ended(end, self.results.len());
        Ok(SessionOutcome {
            results: self.results,
            end,
        })
    }

    fn menu_loop(&mut self) -> Result<(), ConsoleError> {
        loop {
            let shape_choice = self.ask_shape_menu()?;
            if shape_choice == EXIT {
                return Ok(());
            }

            let operation_choice = self.ask_operation_menu()?;
            if operation_choice == BACK {
                continue;
            }

            self.calculate(shape_choice, operation_choice)?;
        }
    }

    fn ask_shape_menu(&mut self) -> Result<u8, ConsoleError> {
        self.console.write_line("")?;
        self.console.write_line(messages::SHAPE_MENU_TITLE)?;
        for shape in Shape::ALL {
            self.console
                .write_line(&format!("{}. {}", shape.choice(), shape.label()))?;
        }
        self.console.write_line(messages::EXIT_OPTION)?;
        read_menu_option(&mut self.console, SHAPE_MENU_MAX)
    }

    fn ask_operation_menu(&mut self) -> Result<u8, ConsoleError> {
        self.console.write_line(messages::OPERATION_MENU_TITLE)?;
        for operation in OperationChoice::ALL {
            self.console
                .write_line(&format!("{}. {}", operation.choice(), operation.label()))?;
        }
        self.console.write_line(messages::BACK_OPTION)?;
        read_menu_option(&mut self.console, OPERATION_MENU_MAX)
    }

    fn calculate(&mut self, shape_choice: u8, operation_choice: u8) -> Result<(), ConsoleError> {
        match OperationFactory::create(shape_choice, operation_choice, &mut self.console) {
            Ok(operation) => {
                let value = operation.calculate();
                self.results.push(value);
                self.observer.calculated(&operation, value);
                self.console.write_line(&format!(
                    "{}{}",
                    messages::RESULT_PREFIX,
                    format_float(value)
                ))
            }
            Err(DispatchError::Domain(err)) => {
                self.observer.dispatch_failed(&err);
                self.console.notify(&err.to_string())
            }
            Err(DispatchError::Console(err)) => Err(err),
        }
    }

    fn print_results(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line(messages::STORED_RESULTS_HEADER)?;
        for value in self.results.iter() {
            self.console.write_line(&format_float(value))?;
        }
        Ok(())
    }
}
