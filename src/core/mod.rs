//! Core logger types

pub mod error;
pub mod flags;
pub mod line_writer;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output;
pub mod registry;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use line_writer::LineWriter;
pub use log_level::LogLevel;
pub use logger::{Joined, Logger};
pub use metrics::LoggerMetrics;
pub use output::Output;
pub use registry::{Registry, RegistryBuilder, ROOT_LOGGER_NAME};
