//! Logging macros for format-string message variants.
//!
//! These are the formatted counterparts of the plain-message methods on
//! [`Logger`](crate::Logger): the format string is expanded with `format!`
//! before the entry reaches the logger, so every entry is a single bounded
//! string by the time it is dispatched.
//!
//! # Examples
//!
//! ```
//! use ringlog::prelude::*;
//! use ringlog::info;
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting at an explicit level.
///
/// ```
/// # use ringlog::prelude::*;
/// # let logger = Logger::new();
/// use ringlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message with automatic formatting.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message with automatic formatting.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message with automatic formatting.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message with automatic formatting.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message with automatic formatting.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};

    #[test]
    fn test_log_macro() {
        let logger = Logger::new();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::new();
        debug!(logger, "Counter value: {}", 10);
        info!(logger, "Processing {} items", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Unable to recover: {}", "disk full");
    }

    #[test]
    fn test_macros_respect_floor() {
        let logger = Logger::new();
        logger.set_min_level(LogLevel::Critical);
        debug!(logger, "filtered out {}", 1);
        assert_eq!(logger.metrics().total_logged(), 0);
        critical!(logger, "kept {}", 2);
        assert_eq!(logger.metrics().total_logged(), 1);
    }
}
