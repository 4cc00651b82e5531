//! Process-wide convenience layer
//!
//! The core [`Logger`] is an owned object, but embedding applications often
//! want ambient access. This module provides both observed usage styles:
//!
//! - a strict accessor, [`get`], that errors if [`init`] was never called;
//! - lazy free functions ([`debug`], [`info`], ...) that self-initialize a
//!   default logger (stderr, DEBUG, synchronous) on first use.
//!
//! Both styles share one instance. Replacing or shutting it down drains any
//! pending asynchronous entries before the old logger is discarded.

use crate::core::config::LoggerConfig;
use crate::core::error::{LoggerError, Result};
use crate::core::log_level::LogLevel;
use crate::core::logger::Logger;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

static GLOBAL: RwLock<Option<Logger>> = RwLock::new(None);

/// Install (or reconfigure) the process-wide logger.
pub fn init(config: &LoggerConfig) {
    let mut slot = GLOBAL.write();
    match slot.as_mut() {
        Some(logger) => logger.reconfigure(config),
        None => *slot = Some(Logger::with_config(config)),
    }
}

/// Strict accessor for the process-wide logger.
///
/// Errors with [`LoggerError::NotInitialized`] if [`init`] has not been
/// called; misuse is reported rather than papered over with a default.
pub fn get() -> Result<MappedRwLockReadGuard<'static, Logger>> {
    RwLockReadGuard::try_map(GLOBAL.read(), Option::as_ref)
        .map_err(|_| LoggerError::NotInitialized)
}

/// Drain, join, and discard the process-wide logger.
///
/// Must be called before process exit when asynchronous mode is active;
/// skipping it risks losing the tail of the log.
pub fn shutdown() {
    let logger = GLOBAL.write().take();
    drop(logger);
}

fn with_default<R>(f: impl FnOnce(&Logger) -> R) -> R {
    {
        let guard = GLOBAL.read();
        if let Some(logger) = guard.as_ref() {
            return f(logger);
        }
    }
    let mut slot = GLOBAL.write();
    // Another thread may have initialized between the two locks.
    let logger = slot.get_or_insert_with(Logger::new);
    f(logger)
}

/// Log at an explicit level through the process-wide logger, lazily applying
/// defaults if it was never initialized.
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    with_default(|logger| logger.log(level, message.as_ref()));
}

pub fn debug(message: impl AsRef<str>) {
    log(LogLevel::Debug, message);
}

pub fn info(message: impl AsRef<str>) {
    log(LogLevel::Info, message);
}

pub fn warn(message: impl AsRef<str>) {
    log(LogLevel::Warn, message);
}

pub fn error(message: impl AsRef<str>) {
    log(LogLevel::Error, message);
}

pub fn critical(message: impl AsRef<str>) {
    log(LogLevel::Critical, message);
}

/// Update the floor of the process-wide logger.
pub fn set_min_level(level: LogLevel) {
    with_default(|logger| logger.set_min_level(level));
}
