//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration parse error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Log file could not be opened
    #[error("Failed to open log file '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Strict global accessor used before `global::init`
    #[error("Logger not initialized. Call init() first.")]
    NotInitialized,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sink-open error with the offending path
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::sink_open("/var/log/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to open log file '/var/log/app.log': access denied"
        );

        let err = LoggerError::NotInitialized;
        assert!(err.to_string().contains("not initialized"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }
}
