//! Logging macros.
//!
//! Every level has two macros, mirroring the two method forms:
//!
//! - the plain form (`trace!`, `info!`, ...) takes any number of `Display`
//!   values and joins them with single spaces;
//! - the formatted form (`tracef!`, `infof!`, ...) takes a format string and
//!   arguments, exactly like `format!`.
//!
//! Both report the macro call site as the source location.
//!
//! # Examples
//!
//! ```
//! use rust_vlog::prelude::*;
//! use rust_vlog::{info, infof};
//!
//! let memory = MemoryAppender::new();
//! let registry = Registry::builder()
//!     .root_output(memory.output())
//!     .root_flags(Flags::NONE)
//!     .build();
//! let logger = registry.get_logger("server", None);
//!
//! info!(logger, "listening on port", 8080);
//! infof!(logger, "accepted {} connections", 3);
//!
//! assert_eq!(
//!     memory.contents(),
//!     "server info listening on port 8080\nserver info accepted 3 connections\n"
//! );
//! ```

/// Log space-joined values at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_vlog::prelude::*;
/// # let logger = Registry::builder().root_output(Output::discard()).build().root();
/// use rust_vlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, $crate::Joined(&[$(&$arg as &dyn ::std::fmt::Display),+]))
    };
}

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_vlog::prelude::*;
/// # let logger = Registry::builder().root_output(Output::discard()).build().root();
/// use rust_vlog::logf;
/// logf!(logger, LogLevel::Warn, "retry {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log space-joined values at trace level.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg),+)
    };
}

/// Log space-joined values at debug level.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg),+)
    };
}

/// Log space-joined values at info level.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg),+)
    };
}

/// Log space-joined values at warn level.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg),+)
    };
}

/// Log space-joined values at error level.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg),+)
    };
}

/// Log space-joined values at critical level.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg),+)
    };
}

/// Log a formatted trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_vlog::prelude::*;
/// # let logger = Registry::builder().root_output(Output::discard()).build().root();
/// use rust_vlog::tracef;
/// tracef!(logger, "Entering function: {}()", "calculate");
/// ```
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
///
/// # Examples
///
/// ```
/// # use rust_vlog::prelude::*;
/// # let logger = Registry::builder().root_output(Output::discard()).build().root();
/// use rust_vlog::errorf;
/// errorf!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a formatted critical-level message.
#[macro_export]
macro_rules! criticalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
