//! Logger configuration
//!
//! `LoggerConfig` describes a sink, a level floor, and the delivery mode.
//! It can be built programmatically with the `with_*` methods or loaded from
//! JSON.

use crate::core::error::Result;
use crate::core::log_level::LogLevel;
use crate::core::ring_buffer::BUFFER_SIZE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file path; `None` routes output to standard error.
    pub path: Option<PathBuf>,
    /// Minimum severity that is not filtered out.
    pub min_level: LogLevel,
    /// Deliver through the background writer thread instead of writing in the
    /// caller's thread.
    pub async_mode: bool,
    /// Ring capacity in bytes for asynchronous mode.
    pub buffer_capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: None,
            min_level: LogLevel::Debug,
            async_mode: false,
            buffer_capacity: BUFFER_SIZE,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route output to the given file instead of standard error.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_async_mode(mut self, async_mode: bool) -> Self {
        self.async_mode = async_mode;
        self
    }

    /// Override the ring capacity used in asynchronous mode.
    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields take their defaults (stderr, DEBUG, synchronous).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
