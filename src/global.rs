//! Process-wide registry
//!
//! Most programs want one registry for the whole process. It is created on
//! first use (or by [`init_logging`]) and never torn down. Code that needs
//! isolation, tests in particular, should build its own [`Registry`].

use crate::core::{Logger, Registry};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Install `registry` as the process-wide registry.
///
/// Returns `false`, dropping `registry`, if the global registry was already
/// initialised by an earlier call or by a first [`get_logger`].
pub fn init_logging(registry: Registry) -> bool {
    GLOBAL_REGISTRY.set(registry).is_ok()
}

/// The process-wide registry, created with defaults on first access.
pub fn registry() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(Registry::new)
}

/// Get a logger by name from the process-wide registry.
///
/// See [`Registry::get_logger`].
///
/// # Example
///
/// ```
/// use rust_vlog::{get_logger, LogLevel};
///
/// let db = get_logger("db", None);
/// db.set_level(LogLevel::Warn);
///
/// let pool = get_logger("db.pool", Some(&db));
/// assert_eq!(pool.level(), LogLevel::Trace);
/// assert!(std::sync::Arc::ptr_eq(&db, &get_logger("db", None)));
/// ```
pub fn get_logger(name: &str, parent: Option<&Arc<Logger>>) -> Arc<Logger> {
    registry().get_logger(name, parent)
}

pub fn root_logger() -> Arc<Logger> {
    registry().root()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_root_is_stable() {
        let a = root_logger();
        let b = get_logger("", None);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry().contains(""));
    }

    #[test]
    fn test_init_after_first_use_is_rejected() {
        let _ = registry();
        assert!(!init_logging(Registry::new()));
    }
}
