//! In-memory appender
//!
//! Captures everything written to it in a shared buffer. Useful in tests and
//! anywhere log output needs to be inspected by the program itself.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

use crate::core::Output;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// An [`Output`] writing into this buffer.
    ///
    /// Each call returns a distinct destination handle; clone the returned
    /// value when identity matters.
    pub fn output(&self) -> Output {
        Output::named("memory", self.clone())
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
