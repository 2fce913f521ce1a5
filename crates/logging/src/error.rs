//! crates/logging/src/error.rs
//!
//! Error types for sink configuration.

use logging_sink::SinkError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by [`Logger::apply_config`](crate::Logger::apply_config)
/// and [`Logger::load_config`](crate::Logger::load_config).
///
/// None of these are logged internally; the caller decides whether a failed
/// configuration is fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file sink was configured without a filename.
    #[error("filename is required for file sinks")]
    MissingFilename,
    /// A log file could not be opened or created.
    #[error("failed to open log file {}: {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The configuration document could not be parsed.
    #[error("malformed logging config: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<SinkError> for ConfigError {
    fn from(error: SinkError) -> Self {
        match error {
            SinkError::MissingFilename => Self::MissingFilename,
            SinkError::Open { path, source } => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn missing_filename_maps_across() {
        let err: ConfigError = SinkError::MissingFilename.into();
        assert!(matches!(err, ConfigError::MissingFilename));
        assert!(err.to_string().contains("filename is required"));
    }

    #[test]
    fn open_failure_becomes_io_error() {
        let err: ConfigError = SinkError::Open {
            path: PathBuf::from("/root/locked.log"),
            source: io::Error::new(ErrorKind::PermissionDenied, "access denied"),
        }
        .into();

        match &err {
            ConfigError::Io { path, source } => {
                assert_eq!(path, &PathBuf::from("/root/locked.log"));
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("expected io error, got {other:?}"),
        }
        assert!(err.to_string().contains("/root/locked.log"));
        assert!(err.source().is_some());
    }

    #[test]
    fn json_errors_are_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = json_err.into();

        assert!(matches!(err, ConfigError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed logging config"));
    }
}
