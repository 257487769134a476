//! Shared output destinations
//!
//! An [`Output`] is a cheap, cloneable handle to a byte sink. Every clone
//! refers to the same sink, and two handles compare equal only when they
//! share it. Writes go through the handle's own lock so concurrent lines
//! never interleave.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::appenders::{ConsoleAppender, ConsoleTarget};

pub struct Output {
    name: Arc<str>,
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    /// Wrap any writer as a shared destination.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("custom", writer)
    }

    /// Wrap a writer and attach a short descriptive name (shown by `Debug`).
    pub fn named<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            name: Arc::from(name),
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Standard error. This is where the root logger writes by default.
    pub fn stderr() -> Self {
        Self::named("stderr", ConsoleAppender::new(ConsoleTarget::Stderr))
    }

    pub fn stdout() -> Self {
        Self::named("stdout", ConsoleAppender::new(ConsoleTarget::Stdout))
    }

    /// A destination that accepts and drops everything.
    pub fn discard() -> Self {
        Self::named("discard", io::sink())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one complete line and flush it.
    ///
    /// The sink lock is held for the whole call, so the line reaches the
    /// destination in one piece.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(line)?;
        sink.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.lock().flush()
    }

    /// Whether both handles refer to the same sink.
    #[inline]
    pub fn same_as(&self, other: &Output) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }
}

impl Clone for Output {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl PartialEq for Output {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Output {}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("name", &self.name)
            .field("sink", &Arc::as_ptr(&self.sink))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    #[test]
    fn test_identity_equality() {
        let a = Output::discard();
        let b = a.clone();
        let c = Output::discard();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_as(&b));
    }

    #[test]
    fn test_write_line() {
        let memory = MemoryAppender::new();
        let output = memory.output();

        output.write_line(b"first\n").unwrap();
        output.write_line(b"second\n").unwrap();

        assert_eq!(memory.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_names() {
        assert_eq!(Output::stderr().name(), "stderr");
        assert_eq!(Output::stdout().name(), "stdout");
        assert_eq!(Output::new(Vec::new()).name(), "custom");
        assert!(format!("{:?}", Output::discard()).contains("discard"));
    }
}
