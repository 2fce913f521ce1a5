#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled, key-value logger with four real severities
//! ([`Severity::Debug`] < [`Severity::Info`] < [`Severity::Warn`] <
//! [`Severity::Error`]) plus the two sentinels [`Severity::AllLevels`] and
//! [`Severity::NoLevels`]. Each severity owns one slot in an
//! [`EmitterTable`]; a slot writes every line to an ordered fan-out of sinks
//! (discard, stdout, stderr or an append-only file).
//!
//! # Design
//!
//! Two independent controls shape a [`Logger`]:
//!
//! - **Routing** ([`Logger::apply_config`]) decides where each severity goes.
//!   A [`Config`] lists [`SinkSpec`] entries; an entry's sink is attached to
//!   every real severity at or above its threshold, in configuration order.
//!   The whole table is built first and swapped in under the write lock.
//! - **Threshold** ([`Logger::set_threshold`]) decides whether a severity is
//!   written. Moving the threshold mutes or un-mutes only the half-open range
//!   of severities whose state flips (see [`Transition`]); nothing is reopened.
//!
//! Lines are written through the call families of [`SeverityLogger`]
//! (`raw`, `msg`, `err`, `msg_err`), each attributed to its caller through
//! `#[track_caller]`:
//!
//! ```text
//! WARN  14:03:27 src/server.rs:88: msg=slow request path=/login ms=812
//! ```
//!
//! # Invariants
//!
//! - A fresh logger routes everything to stdout at threshold `Info`.
//! - After any sequence of [`Logger::set_threshold`] calls starting from a
//!   fresh logger, a real severity is live iff it is at or above the threshold.
//! - [`Logger::apply_config`] either installs a complete new table or leaves
//!   the previous one untouched.
//! - Write failures never reach the caller of a logging call.
//!
//! # Errors
//!
//! Configuration problems surface as [`ConfigError`]: a file entry without a
//! path, a file that cannot be opened, or malformed JSON.
//!
//! # Examples
//!
//! ```
//! use logging::{Config, Logger, Severity, SinkSpec, kvs};
//! use logging_sink::{CaptureBuffer, StandardStreams};
//!
//! let stdout = CaptureBuffer::new();
//! let stderr = CaptureBuffer::new();
//! let logger = Logger::with_streams(StandardStreams::new(stdout.writer(), stderr.writer()));
//!
//! logger
//!     .apply_config(
//!         &Config::new()
//!             .with(SinkSpec::stdout(Severity::Info))
//!             .with(SinkSpec::stderr(Severity::Error)),
//!     )
//!     .unwrap();
//!
//! logger.info().msg("listening", kvs!["port", 8080]);
//! logger.error().err(&std::io::Error::other("refused"), kvs!["peer", "db"]);
//!
//! assert_eq!(stdout.lines().len(), 2);
//! assert!(stderr.contents().ends_with(" peer=db err=refused\n"));
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for sink resolution, fan-out and line rendering.
//! - [`global`] for the process-wide logger and its free functions.

mod calls;
mod config;
mod error;
mod global;
mod kv;
mod ladder;
mod levels;
mod logger;
mod macros;
mod router;
mod table;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use calls::{SeverityLogger, render_framed};
pub use config::{Config, SinkSpec};
pub use error::{ConfigError, ConfigResult};
pub use global::{
    apply_config, debug, error, global, info, load_config, set_threshold, threshold, warn,
};
pub use kv::{KeyValues, paired, render_key_values, write_key_values};
pub use ladder::Transition;
pub use levels::{ParseSeverityError, Severity, half_open};
pub use logger::Logger;
pub use router::{build_table, route, routed_severities};
pub use table::EmitterTable;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{SeverityLayer, init_tracing, init_tracing_with_filter};
