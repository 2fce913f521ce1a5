//! crates/logging-sink/src/emitter.rs
//! Line emission: tag, timestamp and caller location in front of a body.

use crate::fan_out::FanOut;
use std::io;
use std::panic::Location;
use time::OffsetDateTime;
use time::macros::format_description;

/// Source location a line is attributed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Callsite {
    file: &'static str,
    line: u32,
}

impl Callsite {
    /// Creates a callsite from explicit parts.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Captures the location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Source file path.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line number within [`file`](Self::file).
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Writes tagged, timestamped lines to a [`FanOut`].
///
/// Lines look like `INFO  15:04:05 src/main.rs:42: msg=started`. The tag is
/// written verbatim, so callers pick its padding.
#[derive(Clone, Debug)]
pub struct LineEmitter {
    tag: &'static str,
    targets: FanOut,
}

impl LineEmitter {
    /// Creates an emitter writing to `targets`.
    pub const fn new(tag: &'static str, targets: FanOut) -> Self {
        Self { tag, targets }
    }

    /// Creates an emitter that drops everything.
    pub const fn discard(tag: &'static str) -> Self {
        Self::new(tag, FanOut::new())
    }

    /// The tag written at the start of each line.
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// The sinks this emitter writes to.
    pub const fn targets(&self) -> &FanOut {
        &self.targets
    }

    /// Reports whether writes can never produce visible output.
    pub fn is_silent(&self) -> bool {
        self.targets.is_silent()
    }

    /// Renders one line for `body` and forwards it to every target.
    pub fn write(&self, callsite: Callsite, body: &str) -> io::Result<()> {
        if self.targets.is_empty() {
            return Ok(());
        }
        let line = render_line(self.tag, &timestamp(), callsite, body);
        self.targets.write_line(line.as_bytes())
    }
}

/// Assembles a line from its parts, appending a newline unless `body` ends
/// with one.
pub fn render_line(tag: &str, timestamp: &str, callsite: Callsite, body: &str) -> String {
    let mut line = format!(
        "{tag}{timestamp} {}:{}:{body}",
        callsite.file(),
        callsite.line()
    );
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Wall-clock time as `HH:MM:SS`, local when the offset is known, UTC otherwise.
pub fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CaptureBuffer, Sink};

    #[test]
    fn render_line_places_parts_in_order() {
        let line = render_line(
            "WARN  ",
            "12:34:56",
            Callsite::new("src/app.rs", 7),
            " msg=hi",
        );
        assert_eq!(line, "WARN  12:34:56 src/app.rs:7: msg=hi\n");
    }

    #[test]
    fn render_line_does_not_double_newline() {
        let line = render_line("INFO  ", "00:00:00", Callsite::new("a.rs", 1), " x=1\n");
        assert_eq!(line, "INFO  00:00:00 a.rs:1: x=1\n");
    }

    #[test]
    fn timestamp_has_clock_shape() {
        let stamp = timestamp();
        let parts: Vec<&str> = stamp.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(
            parts
                .iter()
                .all(|part| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()))
        );
    }

    #[test]
    fn caller_points_at_this_file() {
        let callsite = Callsite::caller();
        assert!(callsite.file().ends_with("emitter.rs"));
        assert!(callsite.line() > 0);
    }

    #[test]
    fn write_emits_one_prefixed_line() {
        let buffer = CaptureBuffer::new();
        let emitter = LineEmitter::new("ERROR ", FanOut::single(Sink::Stdout(buffer.writer())));

        emitter
            .write(Callsite::new("lib.rs", 3), " err=boom")
            .unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERROR "));
        assert!(lines[0].ends_with(" lib.rs:3: err=boom"));
    }

    #[test]
    fn discard_emitter_is_silent() {
        let emitter = LineEmitter::discard("DEBUG ");
        assert!(emitter.is_silent());
        assert_eq!(emitter.tag(), "DEBUG ");
        assert!(emitter.write(Callsite::caller(), " x=1").is_ok());
    }
}
