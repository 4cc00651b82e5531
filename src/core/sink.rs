//! Log output targets
//!
//! A logger writes to exactly one sink: a file opened in append mode, or the
//! process's standard error stream.

use crate::core::error::{LoggerError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Destination of log output.
#[derive(Debug)]
pub enum Sink {
    /// Standard error; the default target.
    Stderr,
    /// A log file, opened create/append.
    File(std::fs::File),
}

impl Sink {
    /// Open `path` for appending, creating it if necessary.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;
        Ok(Sink::File(file))
    }

    /// Write one formatted chunk to the sink.
    ///
    /// Writes are unbuffered so that entries are visible on disk without an
    /// explicit flush step.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        match self {
            Sink::Stderr => std::io::stderr().write_all(bytes)?,
            Sink::File(file) => file.write_all(bytes)?,
        }
        Ok(())
    }

    pub fn is_stderr(&self) -> bool {
        matches!(self, Sink::Stderr)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Sink::Stderr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_appends_across_reopens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("append.log");

        let mut sink = Sink::open(&path).unwrap();
        sink.write_all(b"first\n").unwrap();
        drop(sink);

        let mut sink = Sink::open(&path).unwrap();
        sink.write_all(b"second\n").unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_failure_reports_path() {
        let err = Sink::open("/definitely/missing/dir/app.log").unwrap_err();
        assert!(err.to_string().contains("/definitely/missing/dir/app.log"));
    }

    #[test]
    fn test_default_is_stderr() {
        assert!(Sink::default().is_stderr());
    }
}
