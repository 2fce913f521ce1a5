use super::{SharedWriter, Sink};
use crate::error::{SinkError, SinkResult};
use crate::kind::SinkKind;
use crate::params::SinkParams;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Writers standing in for the process standard streams.
///
/// Loggers resolve `stdout`/`stderr` sinks through this pair, which lets tests
/// and embedders redirect them without touching the real file descriptors.
#[derive(Clone, Debug)]
pub struct StandardStreams {
    stdout: SharedWriter,
    stderr: SharedWriter,
}

impl StandardStreams {
    /// The real process streams.
    pub fn process() -> Self {
        Self::new(SharedWriter::stdout(), SharedWriter::stderr())
    }

    /// Custom stand-ins for stdout and stderr.
    pub const fn new(stdout: SharedWriter, stderr: SharedWriter) -> Self {
        Self { stdout, stderr }
    }

    /// Returns a sink writing to the stdout stand-in.
    pub fn stdout(&self) -> Sink {
        Sink::Stdout(self.stdout.clone())
    }

    /// Returns a sink writing to the stderr stand-in.
    pub fn stderr(&self) -> Sink {
        Sink::Stderr(self.stderr.clone())
    }
}

impl Default for StandardStreams {
    fn default() -> Self {
        Self::process()
    }
}

/// Resolves sink entries into open resources.
///
/// One resolver covers one configuration pass: every distinct file path is
/// opened once and later entries naming the same path share the handle.
#[derive(Debug)]
pub struct SinkResolver<'a> {
    streams: &'a StandardStreams,
    files: HashMap<PathBuf, SharedWriter>,
}

impl<'a> SinkResolver<'a> {
    /// Creates a resolver using `streams` for the standard stream kinds.
    pub fn new(streams: &'a StandardStreams) -> Self {
        Self {
            streams,
            files: HashMap::new(),
        }
    }

    /// Opens (or reuses) the resource described by `kind` and `params`.
    pub fn resolve(&mut self, kind: SinkKind, params: &SinkParams) -> SinkResult<Sink> {
        match kind {
            SinkKind::Discard => Ok(Sink::Discard),
            SinkKind::Stdout => Ok(self.streams.stdout()),
            SinkKind::Stderr => Ok(self.streams.stderr()),
            SinkKind::File => {
                let path = params.filename().ok_or(SinkError::MissingFilename)?;
                let writer = self.file_writer(path, params.mode())?;
                Ok(Sink::File {
                    path: path.to_path_buf(),
                    writer,
                })
            }
        }
    }

    /// Number of distinct files opened so far.
    pub fn opened_files(&self) -> usize {
        self.files.len()
    }

    fn file_writer(&mut self, path: &Path, mode: u32) -> SinkResult<SharedWriter> {
        if let Some(writer) = self.files.get(path) {
            return Ok(writer.clone());
        }

        let file = open_append(path, mode).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = SharedWriter::new(file);
        self.files.insert(path.to_path_buf(), writer.clone());
        Ok(writer)
    }
}

/// Opens `path` for appending, creating it with `mode` when absent.
fn open_append(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path)
}
