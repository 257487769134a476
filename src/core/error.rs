//! Error types for the logger system
//!
//! Emission and registry lookups never fail. Errors only come out of the
//! fallible edges: opening destinations and parsing configuration values.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel(_)));

        let err = LoggerError::file_lock("/var/log/app.log");
        assert!(matches!(err, LoggerError::FileLockError { .. }));

        let err: LoggerError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::invalid_level("loud").to_string(),
            "Invalid log level: 'loud'"
        );
        assert_eq!(
            LoggerError::file_lock("/var/log/app.log").to_string(),
            "Failed to acquire file lock on '/var/log/app.log'"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open file"));
    }
}
