use std::collections::VecDeque;
use std::io;

use crate::usecases::ports::Console;
use crate::usecases::ports::ConsoleError;

/// Console fed from a fixed list of input lines, capturing everything written.
///
/// Running out of lines reads as end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    notices: Vec<String>,
    reads: usize,
    fail_writes: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every write fails with an I/O error.
    pub fn with_write_failure(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn output_lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }

    /// Messages sent through [`Console::notify`], in order.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    fn check_writable(&self) -> Result<(), ConsoleError> {
        if self.fail_writes {
            return Err(ConsoleError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "scripted write failure",
            )));
        }
        Ok(())
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let line = self.input.pop_front().ok_or(ConsoleError::Closed)?;
        self.reads += 1;
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.check_writable()?;
        self.output.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.check_writable()?;
        self.output.push_str(line);
        self.output.push('\n');
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.notices.push(message.to_string());
        self.write_line(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_reads_then_closes() {
        let mut console = ScriptedConsole::new(["1", "2"]);
        assert_eq!(console.read_line().unwrap(), "1");
        assert_eq!(console.read_line().unwrap(), "2");
        assert!(console.read_line().unwrap_err().is_closed());
        assert_eq!(console.reads(), 2);
    }

    #[test]
    fn test_scripted_console_captures_output_and_notices() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.write("Opción: ").unwrap();
        console.notify("Opción fuera de rango.").unwrap();
        assert_eq!(console.output(), "Opción: Opción fuera de rango.\n");
        assert_eq!(console.notices(), ["Opción fuera de rango."]);
    }

    #[test]
    fn test_scripted_console_write_failure() {
        let mut console = ScriptedConsole::new(["1"]).with_write_failure();
        assert!(matches!(
            console.write_line("x"),
            Err(ConsoleError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe
        ));
    }
}
