//! Name-keyed logger registry
//!
//! The registry owns one [`Logger`] per name and always contains the root
//! logger, whose name is the empty string. Loggers are created on first
//! request and live as long as the registry; there is no removal.
//!
//! There is no hierarchy. A parent passed to [`Registry::get_logger`] only
//! donates its current output and flags to the new logger at creation time.

use super::{flags::Flags, log_level::LogLevel, logger::Logger, output::Output};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the root logger.
pub const ROOT_LOGGER_NAME: &str = "";

pub struct Registry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    root: Arc<Logger>,
}

impl Registry {
    /// A registry whose root writes to stderr with [`Flags::DEFAULT`].
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for Registry
    ///
    /// # Example
    /// ```
    /// use rust_vlog::prelude::*;
    ///
    /// let registry = Registry::builder()
    ///     .root_level(LogLevel::Info)
    ///     .root_flags(Flags::STANDARD)
    ///     .root_output(Output::stdout())
    ///     .build();
    ///
    /// assert_eq!(registry.root().level(), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// Return the logger called `name`, creating it if needed.
    ///
    /// An existing logger is returned as is and `parent` is ignored. A new
    /// logger starts at [`LogLevel::Trace`] and copies the output and flags
    /// of `parent`, or of the root logger when `parent` is `None`. The empty
    /// name always yields the root logger.
    ///
    /// Lookup and insertion happen under one lock, so concurrent callers
    /// asking for the same new name all get the same instance.
    pub fn get_logger(&self, name: &str, parent: Option<&Arc<Logger>>) -> Arc<Logger> {
        if name == ROOT_LOGGER_NAME {
            return self.root();
        }

        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let donor = parent.unwrap_or(&self.root);
        let (output, flags) = donor.writer().snapshot();
        let logger = Arc::new(Logger::new(name, output, flags));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// Number of registered loggers, root included.
    pub fn logger_count(&self) -> usize {
        self.loggers.lock().len()
    }

    /// Registered names in sorted order, root (`""`) first.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.names())
            .finish()
    }
}

/// Builder for a [`Registry`] with a configured root logger
pub struct RegistryBuilder {
    root_level: LogLevel,
    root_output: Option<Output>,
    root_flags: Flags,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            root_level: LogLevel::Trace,
            root_output: None,
            root_flags: Flags::DEFAULT,
        }
    }

    /// Set the root logger's threshold
    #[must_use = "builder methods return a new value"]
    pub fn root_level(mut self, level: LogLevel) -> Self {
        self.root_level = level;
        self
    }

    /// Set where the root logger, and loggers created without a parent, write
    #[must_use = "builder methods return a new value"]
    pub fn root_output(mut self, output: Output) -> Self {
        self.root_output = Some(output);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn root_flags(mut self, flags: Flags) -> Self {
        self.root_flags = flags;
        self
    }

    /// Build the registry, creating its root logger.
    pub fn build(self) -> Registry {
        let output = self.root_output.unwrap_or_else(Output::stderr);
        let root = Arc::new(Logger::new(ROOT_LOGGER_NAME, output, self.root_flags));
        root.set_level(self.root_level);

        let mut loggers = HashMap::new();
        loggers.insert(ROOT_LOGGER_NAME.to_string(), Arc::clone(&root));

        Registry {
            loggers: Mutex::new(loggers),
            root,
        }
    }
}
