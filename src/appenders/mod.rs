//! Destination implementations
//!
//! Each appender is a plain [`std::io::Write`] sink that can be wrapped into
//! an [`Output`](crate::core::Output) and handed to a logger.

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use file::FileAppender;
pub use memory::MemoryAppender;
