//! crates/logging-sink/src/error.rs
//!
//! Error types for sink resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for sink resolution.
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors that can occur while resolving a sink resource.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A file sink was requested without a filename.
    #[error("filename is required for file sinks")]
    MissingFilename,
    /// The log file could not be opened or created.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
