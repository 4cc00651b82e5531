//! # ringlog
//!
//! A minimal, embeddable logging facility with leveled, timestamped,
//! thread-safe output to a file or standard error, and an optional
//! asynchronous delivery mode.
//!
//! ## Features
//!
//! - **Leveled**: five severities with a runtime-adjustable floor
//! - **Asynchronous option**: producers enqueue into a bounded byte ring; a
//!   single background thread performs the file writes
//! - **Graceful shutdown**: the ring is drained to empty before the writer
//!   thread is stopped, so accepted entries are never lost
//! - **Embeddable**: the core `Logger` is an owned object; a global
//!   convenience layer is available but optional
//!
//! ## Example
//!
//! ```
//! use ringlog::prelude::*;
//!
//! let logger = Logger::new();
//! logger.info("application started");
//! logger.set_min_level(LogLevel::Warn);
//! logger.info("filtered out");
//! logger.warn("low disk space");
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Drained, LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics, Result, RingBuffer,
        Sink, BUFFER_SIZE, MAX_LOG_ENTRY,
    };
}

pub use crate::core::{
    Drained, LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics, Result, RingBuffer, Sink,
    BUFFER_SIZE, MAX_LOG_ENTRY,
};
