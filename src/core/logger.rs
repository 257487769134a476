//! Named, leveled logger
//!
//! A [`Logger`] gates messages on its threshold and hands the survivors to
//! its [`LineWriter`]. Loggers are obtained from a
//! [`Registry`](super::Registry) and shared as `Arc<Logger>`; every setter
//! works through `&self` so a change is seen by all holders at once.

use super::{
    flags::Flags, line_writer::LineWriter, log_level::LogLevel, metrics::LoggerMetrics,
    output::Output,
};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;

pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    writer: LineWriter,
    /// Counters for filtered messages and failed writes
    metrics: LoggerMetrics,
}

impl Logger {
    pub(crate) fn new(name: &str, output: Output, flags: Flags) -> Self {
        Self {
            name: name.to_string(),
            min_level: RwLock::new(LogLevel::Trace),
            writer: LineWriter::new(name, output, flags),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the threshold. Messages below `level` are dropped from now on.
    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether a message at `level` would currently be written.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level())
    }

    /// Redirect subsequent lines. Nothing already written is touched.
    pub fn set_output(&self, output: Output) {
        self.writer.set_output(output);
    }

    pub fn output(&self) -> Output {
        self.writer.output()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.writer.set_flags(flags);
    }

    pub fn flags(&self) -> Flags {
        self.writer.flags()
    }

    pub(crate) fn writer(&self) -> &LineWriter {
        &self.writer
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log a message at `level`.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.emit(level, Location::caller(), format_args!("{}{}", level.tag(), message));
    }

    /// Log pre-formatted arguments at `level`, usually built with
    /// `format_args!`.
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, Location::caller(), format_args!("{}{}", level.tag(), args));
    }

    fn emit(&self, level: LogLevel, location: &Location<'_>, body: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        // Best effort: a failing destination is counted, never reported.
        match self.writer.write(location, body) {
            Ok(()) => {
                self.metrics.record_emitted();
            }
            Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(LogLevel::Critical, message);
    }

    #[inline]
    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Trace, args);
    }

    #[inline]
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    #[inline]
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    #[inline]
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warn, args);
    }

    #[inline]
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    #[inline]
    #[track_caller]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Critical, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("writer", &self.writer)
            .finish()
    }
}

/// Displays a list of values separated by single spaces.
///
/// Backs the plain-form macros (`trace!`, `info!`, ...), which accept any
/// number of `Display` arguments.
///
/// ```
/// use rust_vlog::Joined;
///
/// let joined = Joined(&[&"x", &1, &2.5]);
/// assert_eq!(joined.to_string(), "x 1 2.5");
/// ```
#[derive(Clone, Copy)]
pub struct Joined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
