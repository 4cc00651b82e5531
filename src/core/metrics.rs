//! Logger counters for observability
//!
//! The logger is fire-and-forget: ring overflow and sink write failures are
//! absorbed rather than surfaced to producers. These counters let an embedder
//! observe that absorption without changing the non-blocking contract.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Entries accepted for delivery (enqueued or written directly).
    total_logged: AtomicU64,
    /// Entries lost, fully or partially, to ring overflow.
    dropped_count: AtomicU64,
    /// Sink write failures absorbed by the writer path.
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_dropped(&self) {
        self.dropped_count.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.write_errors(), 0);
    }

    #[test]
    fn test_recording_increments() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged();
        metrics.record_logged();
        metrics.record_dropped();
        metrics.record_write_error();
        assert_eq!(metrics.total_logged(), 2);
        assert_eq!(metrics.dropped_count(), 1);
        assert_eq!(metrics.write_errors(), 1);
    }
}
