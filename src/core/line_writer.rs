//! The delegate line writer wrapped by every logger
//!
//! A `LineWriter` knows nothing about levels. It takes an already rendered
//! message body, decorates it with the logger name and the header selected
//! by its [`Flags`], terminates it with a newline and writes it to its
//! current [`Output`] in one piece.

use super::{flags::Flags, output::Output, timestamp};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::io;
use std::panic::Location;

#[derive(Debug, Clone)]
struct WriterState {
    output: Output,
    flags: Flags,
}

pub struct LineWriter {
    prefix: String,
    state: Mutex<WriterState>,
}

impl LineWriter {
    /// Create a writer for the logger called `name`.
    ///
    /// Non-empty names become the prefix `"<name> "`; the empty name gets no
    /// prefix at all.
    pub fn new(name: &str, output: Output, flags: Flags) -> Self {
        let prefix = if name.is_empty() {
            String::new()
        } else {
            format!("{} ", name)
        };

        Self {
            prefix,
            state: Mutex::new(WriterState { output, flags }),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn output(&self) -> Output {
        self.state.lock().output.clone()
    }

    pub fn set_output(&self, output: Output) {
        self.state.lock().output = output;
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    /// Current destination and flags, read together.
    pub fn snapshot(&self) -> (Output, Flags) {
        let state = self.state.lock();
        (state.output.clone(), state.flags)
    }

    /// Render `body` as a full line and write it.
    ///
    /// `location` is reported when the flags ask for a source location.
    pub fn write(&self, location: &Location<'_>, body: fmt::Arguments<'_>) -> io::Result<()> {
        let (output, flags) = self.snapshot();
        let line = self.render(flags, &Utc::now(), location, body);
        output.write_line(line.as_bytes())
    }

    /// Build the line without writing it.
    pub fn render(
        &self,
        flags: Flags,
        now: &DateTime<Utc>,
        location: &Location<'_>,
        body: fmt::Arguments<'_>,
    ) -> String {
        let mut line = String::with_capacity(64 + self.prefix.len());

        let name_after_header = flags.contains(Flags::NAME_AFTER_HEADER);
        if !name_after_header {
            line.push_str(&self.prefix);
        }
        timestamp::write_timestamp(&mut line, flags, now);
        timestamp::write_location(&mut line, flags, location);
        if name_after_header {
            line.push_str(&self.prefix);
        }

        let _ = line.write_fmt(body);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("output", &state.output)
            .field("flags", &state.flags)
            .finish()
    }
}
