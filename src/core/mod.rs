//! Core logger types

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod ring_buffer;
pub mod sink;
pub mod timestamp;
pub(crate) mod writer;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, MAX_LOG_ENTRY};
pub use metrics::LoggerMetrics;
pub use ring_buffer::{Drained, RingBuffer, BUFFER_SIZE};
pub use sink::Sink;
