#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Leveled, sink-routed logging.
//!
//! This crate re-exports the workspace's two layers under one name:
//! [`logging`] (severities, threshold ladder, routing and call families) and
//! [`sink`] (sink resolution, fan-out and line rendering).
//!
//! ```
//! use logs::{Logger, Severity, kvs};
//! use logs::sink::CaptureBuffer;
//!
//! let out = CaptureBuffer::new();
//! let logger = Logger::with_writers(out.writer(), CaptureBuffer::new().writer());
//!
//! logger.load_config(br#"{"Items": [{"level": "warn", "stream_type": "stdout"}]}"#).unwrap();
//! logger.info().raw(kvs!["dropped", 1]);
//! logger.warn().raw(kvs!["user", 42, "op", "login"]);
//!
//! assert!(out.contents().ends_with(" user=42 op=login\n"));
//! ```

pub use logging::*;

/// Sink resolution, fan-out and line rendering.
pub mod sink {
    pub use logging_sink::*;
}
