//! Logger core: lifecycle, level filtering, dispatch, shutdown
//!
//! A `Logger` is an explicitly owned object; nothing here requires global
//! state. The process-wide convenience layer lives in [`crate::global`].

use crate::core::config::LoggerConfig;
use crate::core::log_level::LogLevel;
use crate::core::metrics::LoggerMetrics;
use crate::core::ring_buffer::RingBuffer;
use crate::core::sink::Sink;
use crate::core::timestamp;
use crate::core::writer;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread;

/// Maximum size of one formatted log entry in bytes, trailing newline
/// included. Longer entries are truncated, never rejected.
pub const MAX_LOG_ENTRY: usize = 1024;

struct AsyncState {
    ring: Arc<RingBuffer>,
    handle: thread::JoinHandle<()>,
}

/// Leveled, timestamped logger writing to a file or standard error.
///
/// In synchronous mode the calling thread performs the sink write under a
/// mutex. In asynchronous mode the call only copies the formatted line into a
/// bounded ring; a background writer thread performs the file I/O. Dropping
/// the logger drains the ring and joins the writer, so no accepted entry is
/// lost to shutdown.
pub struct Logger {
    sink: Arc<Mutex<Sink>>,
    min_level: RwLock<LogLevel>,
    async_state: Option<AsyncState>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger in the default state: stderr, `Debug` floor,
    /// synchronous delivery.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Sink::Stderr)),
            min_level: RwLock::new(LogLevel::Debug),
            async_state: None,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a logger and apply `config` in one step.
    #[must_use]
    pub fn with_config(config: &LoggerConfig) -> Self {
        let mut logger = Self::new();
        logger.reconfigure(config);
        logger
    }

    /// Apply a new configuration to a running logger.
    ///
    /// If a writer thread is active it is first drained to empty and joined,
    /// so entries enqueued before the switch always reach the old sink. A
    /// file that cannot be opened is reported on stderr and the logger falls
    /// back to the stderr sink; this is never fatal. The level floor is
    /// updated unconditionally.
    pub fn reconfigure(&mut self, config: &LoggerConfig) {
        self.stop_writer();

        let sink = match &config.path {
            Some(path) => Sink::open(path).unwrap_or_else(|e| {
                eprintln!("ringlog: {}; falling back to stderr", e);
                Sink::Stderr
            }),
            None => Sink::Stderr,
        };
        *self.sink.lock() = sink;
        *self.min_level.write() = config.min_level;

        if config.async_mode {
            self.start_writer(config.buffer_capacity);
        }
    }

    /// Drain, stop, and reset to the default state (stderr, `Debug`,
    /// synchronous). The log file, if any, is closed.
    ///
    /// Callers using asynchronous mode should invoke this (or drop the
    /// logger) before process exit to guarantee the tail of the log reaches
    /// the file.
    pub fn shutdown(&mut self) {
        self.stop_writer();
        *self.sink.lock() = Sink::Stderr;
        *self.min_level.write() = LogLevel::Debug;
    }

    /// Update the level floor; takes effect for all subsequent calls.
    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn is_async(&self) -> bool {
        self.async_state.is_some()
    }

    /// Counters for dropped entries and absorbed write failures.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log `message` at `level`.
    ///
    /// Messages below the floor are dropped with no side effect. Otherwise
    /// the entry is formatted as `<timestamp> [<LEVEL>] <message>\n`, capped
    /// at [`MAX_LOG_ENTRY`] bytes, and either written to the sink under its
    /// mutex (synchronous) or copied into the ring (asynchronous). A full
    /// ring silently discards the excess; producers never block on the
    /// consumer.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if level < *self.min_level.read() {
            return;
        }

        let entry = format_entry(level, message.as_ref());
        match &self.async_state {
            Some(state) => {
                let written = state.ring.write(entry.as_bytes());
                if written < entry.len() {
                    self.metrics.record_dropped();
                } else {
                    self.metrics.record_logged();
                }
            }
            None => {
                if self.sink.lock().write_all(entry.as_bytes()).is_err() {
                    self.metrics.record_write_error();
                } else {
                    self.metrics.record_logged();
                }
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message);
    }

    fn start_writer(&mut self, capacity: usize) {
        let ring = Arc::new(RingBuffer::new(capacity));
        let handle = writer::spawn(
            Arc::clone(&ring),
            Arc::clone(&self.sink),
            Arc::clone(&self.metrics),
        );
        self.async_state = Some(AsyncState { ring, handle });
    }

    /// Drain the ring to empty, then stop and join the writer.
    ///
    /// The wait must come before the stop: the writer treats stopped-and-empty
    /// as its exit condition, and stopping first would race pending entries
    /// against the exit.
    fn stop_writer(&mut self) {
        if let Some(state) = self.async_state.take() {
            state.ring.wait_until_empty();
            state.ring.stop();
            let _ = state.handle.join();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.stop_writer();
    }
}

/// Build `"<timestamp> [<LEVEL>] <message>\n"`, truncating oversize entries
/// to [`MAX_LOG_ENTRY`] bytes at a char boundary while keeping the newline.
fn format_entry(level: LogLevel, message: &str) -> String {
    let mut line = format!("{} [{}] {}\n", timestamp::now(), level, message);
    if line.len() > MAX_LOG_ENTRY {
        let mut cut = MAX_LOG_ENTRY - 1;
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        line.truncate(cut);
        line.push('\n');
    }
    line
}
