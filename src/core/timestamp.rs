//! Timestamp formatting
//!
//! Every log line starts with a local wall-clock timestamp of the form
//! `YYYY-MM-DD HH:MM:SS.ffffff`, with six-digit zero-padded microseconds.

use chrono::Local;

/// Format the current local time as `YYYY-MM-DD HH:MM:SS.ffffff`.
pub fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
