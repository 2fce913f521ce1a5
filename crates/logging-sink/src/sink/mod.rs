mod resolver;
mod shared;

pub use resolver::{SinkResolver, StandardStreams};
pub use shared::{CaptureBuffer, SharedWriter};

use crate::kind::SinkKind;
use std::io;
use std::path::{Path, PathBuf};

/// A resolved sink resource.
///
/// Cloning a sink clones the handle, never the resource: two clones of a file
/// sink append to the same open file.
#[derive(Clone, Debug)]
pub enum Sink {
    /// Accepts and drops every line.
    Discard,
    /// Standard output, or whatever writer stands in for it.
    Stdout(SharedWriter),
    /// Standard error, or whatever writer stands in for it.
    Stderr(SharedWriter),
    /// A file opened for appending.
    File {
        /// Path the file was opened from.
        path: PathBuf,
        /// Handle to the open file.
        writer: SharedWriter,
    },
}

impl Sink {
    /// Returns the kind of destination.
    pub const fn kind(&self) -> SinkKind {
        match self {
            Self::Discard => SinkKind::Discard,
            Self::Stdout(_) => SinkKind::Stdout,
            Self::Stderr(_) => SinkKind::Stderr,
            Self::File { .. } => SinkKind::File,
        }
    }

    /// Returns the file path for file sinks.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns the underlying writer, if any.
    pub const fn writer(&self) -> Option<&SharedWriter> {
        match self {
            Self::Discard => None,
            Self::Stdout(writer) | Self::Stderr(writer) | Self::File { writer, .. } => Some(writer),
        }
    }

    /// Reports whether lines written here are dropped.
    pub const fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }

    /// Writes one rendered line.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self.writer() {
            Some(writer) => writer.write_line(line),
            None => Ok(()),
        }
    }

    /// Reports whether both sinks write to the same resource.
    ///
    /// Two discard sinks are considered the same resource.
    pub fn same_resource(&self, other: &Self) -> bool {
        match (self.writer(), other.writer()) {
            (Some(a), Some(b)) => a.same_resource(b),
            (None, None) => true,
            _ => false,
        }
    }
}
