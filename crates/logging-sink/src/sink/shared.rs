use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, thread-safe handle to a byte destination.
///
/// Every clone refers to the same underlying writer. A line is written with a
/// single [`Write::write_all`] under the writer's mutex, so lines produced by
/// concurrent callers never interleave. The writer is dropped (and, for
/// files, closed) when the last handle goes away.
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<dyn Write + Send>>,
}

impl SharedWriter {
    /// Wraps `writer` in a shared handle.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Handle to the process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Handle to the process standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Writes `line` in one piece and flushes.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(line)?;
        writer.flush()
    }

    /// Reports whether both handles refer to the same writer.
    pub fn same_resource(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> MutexGuard<'_, dyn Write + Send + 'static> {
        // A writer poisoned by a panicking thread is still usable for logging.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

/// In-memory writer whose clones share one buffer.
///
/// Handy for capturing emitted lines, for example by passing one as the
/// standard output of a logger under test.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared writer that appends into this buffer.
    pub fn writer(&self) -> SharedWriter {
        SharedWriter::new(self.clone())
    }

    /// Copies out the captured bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured bytes as text, replacing invalid UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Returns the captured text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
