//! crates/logging-sink/src/fan_out.rs
//! Ordered multi-sink writer.

use crate::sink::Sink;
use std::io;

/// Forwards every line to each of its sinks in insertion order.
///
/// An empty fan-out accepts writes and produces no output.
#[derive(Clone, Debug, Default)]
pub struct FanOut {
    sinks: Vec<Sink>,
}

impl FanOut {
    /// Creates an empty fan-out.
    pub const fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Creates a fan-out over a single sink.
    pub fn single(sink: Sink) -> Self {
        Self { sinks: vec![sink] }
    }

    /// Appends a sink after the existing ones.
    pub fn push(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    /// Returns the sinks in write order.
    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// Number of sinks, discard sinks included.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Reports whether no sink is attached.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Reports whether writes can never produce visible output.
    pub fn is_silent(&self) -> bool {
        self.sinks.iter().all(Sink::is_discard)
    }

    /// Writes `line` to every sink.
    ///
    /// A failing sink does not stop the remaining ones; the first error is
    /// returned once all sinks have been tried.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(error) = sink.write_line(line) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl FromIterator<Sink> for FanOut {
    fn from_iter<I: IntoIterator<Item = Sink>>(iter: I) -> Self {
        Self {
            sinks: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sink> for FanOut {
    fn extend<I: IntoIterator<Item = Sink>>(&mut self, iter: I) {
        self.sinks.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CaptureBuffer, SharedWriter};
    use std::io::{ErrorKind, Write};
    use std::sync::{Arc, Mutex};

    struct Recorder {
        name: &'static str,
        order: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.order.lock().unwrap().push(self.name);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_follow_insertion_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let recorder = |name| {
            Sink::Stdout(SharedWriter::new(Recorder {
                name,
                order: Arc::clone(&order),
            }))
        };
        let fan_out: FanOut = [recorder("a"), recorder("b"), recorder("c")]
            .into_iter()
            .collect();

        fan_out.write_line(b"line\n").unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_fan_out_is_silent_and_accepts_writes() {
        let fan_out = FanOut::new();
        assert!(fan_out.is_empty());
        assert!(fan_out.is_silent());
        assert!(fan_out.write_line(b"nothing\n").is_ok());
    }

    #[test]
    fn discard_only_fan_out_is_silent() {
        let fan_out = FanOut::single(Sink::Discard);
        assert_eq!(fan_out.len(), 1);
        assert!(fan_out.is_silent());
    }

    #[test]
    fn failing_sink_does_not_starve_later_sinks() {
        let buffer = CaptureBuffer::new();
        let mut fan_out = FanOut::single(Sink::Stderr(SharedWriter::new(Broken)));
        fan_out.push(Sink::Stdout(buffer.writer()));

        let err = fan_out.write_line(b"still delivered\n").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
        assert_eq!(buffer.contents(), "still delivered\n");
    }
}
