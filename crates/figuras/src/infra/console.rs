//! Console port over real stdin/stdout.

use std::io;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Stdout;
use std::io::Write;

use figuras_common::Colors;
use figuras_usecases::ports::Console;
use figuras_usecases::ports::ConsoleError;
use tracing::debug;
use tracing::trace;

pub struct StdioConsole<R, W> {
    reader: R,
    writer: W,
    buf: Vec<u8>,
}

impl StdioConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: Vec::new(),
        }
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdioConsole<R, W> {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            debug!("Input closed");
            return Err(ConsoleError::Closed);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        // Invalid UTF-8 becomes replacement characters and fails validation.
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        trace!(bytes = read, "Read input line");
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), ConsoleError> {
        debug!(message, "Input rejected");
        self.write_line(&Colors::warning(message))
    }
}
