//! File appender implementation

use crate::core::{LoggerError, Output, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends log lines to a file.
///
/// The file is opened in append mode and created if missing. Writes go
/// straight to the file with no buffering, so every line is on disk as soon
/// as the logger returns. With locking enabled (feature `file`), every line
/// is written under an advisory exclusive lock so several processes can
/// share one log file.
pub struct FileAppender {
    file: File,
    path: PathBuf,
    locking: bool,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            file,
            path,
            locking: false,
        })
    }

    /// Take an advisory exclusive lock around every line.
    ///
    /// The lock is probed once, here: this fails if another handle holds it
    /// right now. Later writes block until the lock is free instead of
    /// failing.
    #[cfg(feature = "file")]
    pub fn with_locking(mut self) -> Result<Self> {
        use fs2::FileExt;

        FileExt::try_lock_exclusive(&self.file)
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;
        FileExt::unlock(&self.file)?;

        self.locking = true;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_locking(&self) -> bool {
        self.locking
    }

    /// Wrap this appender as a logger destination.
    pub fn into_output(self) -> Output {
        let name = format!("file:{}", self.path.display());
        Output::named(&name, self)
    }

    #[cfg(feature = "file")]
    fn write_locked(&mut self, buf: &[u8]) -> io::Result<()> {
        use fs2::FileExt;

        FileExt::lock_exclusive(&self.file)?;
        let result = self.file.write_all(buf);
        let unlocked = FileExt::unlock(&self.file);
        result.and(unlocked)
    }

    #[cfg(not(feature = "file"))]
    fn write_locked(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file.write_all(buf)
    }
}

impl Write for FileAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.locking {
            self.write_locked(buf)?;
            Ok(buf.len())
        } else {
            self.file.write(buf)
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.locking {
            self.write_locked(buf)
        } else {
            self.file.write_all(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
