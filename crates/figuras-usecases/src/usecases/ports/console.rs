use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Input closed")]
    Closed,
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    pub fn is_closed(&self) -> bool {
        matches!(self, ConsoleError::Closed)
    }
}

/// Line-oriented terminal the session talks through.
pub trait Console {
    /// Next input line without its terminator. End of input is
    /// [`ConsoleError::Closed`].
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Writes `text` with no newline; the text must be visible before the
    /// next read.
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Rejections and recoverable errors. Implementations may style these.
    fn notify(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.write_line(message)
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        (**self).read_line()
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).write(text)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        (**self).write_line(line)
    }

    fn notify(&mut self, message: &str) -> Result<(), ConsoleError> {
        (**self).notify(message)
    }
}
