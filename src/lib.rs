//! # Rust VLog
//!
//! A small leveled logging facade. Each named [`Logger`] wraps a line
//! writer and drops every message below its threshold; a [`Registry`] hands
//! out one shared logger per name.
//!
//! ## Features
//!
//! - **Six ordered levels**: trace, debug, info, warn, error, critical
//! - **Named loggers**: one instance per name, created on first request
//! - **Configurable header**: date, time, microseconds, caller file and line
//! - **Thread Safe**: loggers are shared as `Arc<Logger>` and reconfigured in place
//!
//! ## Example
//!
//! ```
//! use rust_vlog::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let registry = Registry::builder()
//!     .root_output(memory.output())
//!     .root_flags(Flags::NONE)
//!     .build();
//!
//! let svc = registry.get_logger("svc", None);
//! svc.set_level(LogLevel::Info);
//! svc.debugf(format_args!("{}", 5));
//! svc.warnf(format_args!("x={}", 5));
//!
//! assert_eq!(memory.contents(), "svc warn x=5\n");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender, MemoryAppender};
    pub use crate::core::{
        Flags, Joined, LogLevel, Logger, LoggerError, LoggerMetrics, Output, Registry,
        RegistryBuilder, Result,
    };
    pub use crate::global::{get_logger, init_logging, root_logger};
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender, MemoryAppender};
pub use core::{
    Flags, Joined, LineWriter, LogLevel, Logger, LoggerError, LoggerMetrics, Output, Registry,
    RegistryBuilder, Result, ROOT_LOGGER_NAME,
};
pub use global::{get_logger, init_logging, registry, root_logger};
