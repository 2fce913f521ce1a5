#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output side of the `logs` workspace: resolving
//! configured destinations into open resources, fanning a line out to several
//! of them, and rendering the line prefix (tag, timestamp, caller location).
//! The `logging` crate builds its per-severity emitters on top of these
//! primitives and never touches file descriptors itself.
//!
//! # Design
//!
//! - [`SinkResolver`] turns a ([`SinkKind`], [`SinkParams`]) pair into a
//!   [`Sink`]. A resolver spans one configuration pass and opens each distinct
//!   file path once, handing out clones of the same [`SharedWriter`].
//! - [`FanOut`] holds an ordered list of sinks; first inserted writes first.
//! - [`LineEmitter`] prefixes a body with its tag, a `HH:MM:SS` timestamp and
//!   the [`Callsite`], then writes the result through its fan-out.
//!
//! # Invariants
//!
//! - A rendered line is written with one `write_all` under the sink's mutex,
//!   so concurrent lines never interleave within a sink.
//! - Files are opened for appending and created with [`DEFAULT_FILE_MODE`]
//!   (octal `0644`) unless the parameters say otherwise.
//! - An empty fan-out accepts every write and produces nothing.
//!
//! # Errors
//!
//! Resolution reports [`SinkError::MissingFilename`] for a file sink without a
//! path and [`SinkError::Open`] when the file cannot be opened. Writes surface
//! the underlying [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use logging_sink::{
//!     CaptureBuffer, Callsite, FanOut, LineEmitter, SinkKind, SinkParams, SinkResolver,
//!     StandardStreams,
//! };
//!
//! let stdout = CaptureBuffer::new();
//! let streams = StandardStreams::new(stdout.writer(), CaptureBuffer::new().writer());
//! let mut resolver = SinkResolver::new(&streams);
//!
//! let sink = resolver.resolve(SinkKind::Stdout, &SinkParams::default()).unwrap();
//! let emitter = LineEmitter::new("INFO  ", FanOut::single(sink));
//! emitter.write(Callsite::new("main.rs", 10), " msg=ready").unwrap();
//!
//! assert!(stdout.contents().ends_with("main.rs:10: msg=ready\n"));
//! ```

mod emitter;
mod error;
mod fan_out;
mod kind;
mod params;
mod sink;

pub use emitter::{Callsite, LineEmitter, render_line, timestamp};
pub use error::{SinkError, SinkResult};
pub use fan_out::FanOut;
pub use kind::{ParseSinkKindError, SinkKind};
pub use params::{DEFAULT_FILE_MODE, SinkParams};
pub use sink::{CaptureBuffer, SharedWriter, Sink, SinkResolver, StandardStreams};
