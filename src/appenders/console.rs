//! Console appender implementation

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Writes to the process's standard output or standard error.
///
/// The standard stream is locked for each write, so a line handed over in one
/// `write_all` call is never split by output from other threads.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleAppender {
    target: ConsoleTarget,
}

impl ConsoleAppender {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }
}

impl Write for ConsoleAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write(buf),
            ConsoleTarget::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(buf),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        }
    }
}
