//! crates/logging/src/logger.rs
//! The owned logger: threshold, emitter table and the operations over them.

use crate::calls::SeverityLogger;
use crate::config::Config;
use crate::error::ConfigResult;
use crate::kv::{KeyValues, render_key_values};
use crate::ladder::Transition;
use crate::levels::Severity;
use crate::router;
use crate::table::EmitterTable;
use logging_sink::{Callsite, LineEmitter, SharedWriter, StandardStreams};
use std::fmt;
use std::io;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Threshold and table, always swapped under one lock.
#[derive(Debug)]
struct State {
    threshold: Severity,
    table: EmitterTable,
}

/// A leveled logger with four severity slots.
///
/// A fresh logger routes every severity to standard output and sits at
/// threshold [`Severity::Info`], so Debug starts muted. Two independent
/// mechanisms then reshape it:
///
/// - [`apply_config`](Self::apply_config) decides *where* each severity goes
///   and installs a new, fully live table in one step;
/// - [`set_threshold`](Self::set_threshold) decides *whether* a severity is
///   written by muting or un-muting the slots whose state flips.
///
/// Logging calls take the read lock only to clone their slot's emitter, then
/// write outside the lock.
///
/// ```
/// use logging::{Logger, Severity, kvs};
/// use logging_sink::{CaptureBuffer, StandardStreams};
///
/// let stdout = CaptureBuffer::new();
/// let logger = Logger::with_streams(StandardStreams::new(
///     stdout.writer(),
///     CaptureBuffer::new().writer(),
/// ));
///
/// logger.debug().raw(kvs!["hidden", true]);
/// logger.info().msg("started", kvs!["port", 8080]);
///
/// let lines = stdout.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(" msg=started port=8080"));
/// ```
pub struct Logger {
    streams: StandardStreams,
    state: RwLock<State>,
}

impl Logger {
    /// Logger bound to the process standard streams.
    pub fn new() -> Self {
        Self::with_streams(StandardStreams::process())
    }

    /// Logger whose `stdout`/`stderr` sinks write to the given stand-ins.
    pub fn with_streams(streams: StandardStreams) -> Self {
        let mut table = EmitterTable::uniform(&streams.stdout());
        let threshold = Severity::default();
        Transition::between(Severity::AllLevels, threshold).apply(&mut table);

        Self {
            streams,
            state: RwLock::new(State { threshold, table }),
        }
    }

    /// Logger whose `stdout` sinks write to `stdout` and `stderr` sinks to `stderr`.
    pub fn with_writers(stdout: SharedWriter, stderr: SharedWriter) -> Self {
        Self::with_streams(StandardStreams::new(stdout, stderr))
    }

    /// The current threshold.
    pub fn threshold(&self) -> Severity {
        self.read_state().threshold
    }

    /// Moves the threshold, muting or un-muting only the slots that flip.
    ///
    /// Setting the current threshold again is a no-op. Never opens sinks and
    /// never fails.
    pub fn set_threshold(&self, level: Severity) {
        let mut state = self.write_state();
        let transition = Transition::between(state.threshold, level);
        transition.apply(&mut state.table);
        state.threshold = level;
        drop(state);

        #[cfg(feature = "tracing")]
        {
            if transition != Transition::Unchanged {
                tracing::trace!(target: "logging::ladder", threshold = %level, "threshold changed");
            }
        }
    }

    /// Routes every severity according to `config`.
    ///
    /// All sinks are resolved before the lock is taken; on error the previous
    /// table stays installed untouched. On success the new table replaces all
    /// four slots at once with every slot live. The threshold value is kept
    /// as is, so earlier mutes are discarded until the next
    /// [`set_threshold`](Self::set_threshold) call.
    pub fn apply_config(&self, config: &Config) -> ConfigResult<()> {
        let table = router::build_table(config, &self.streams)?;
        let previous = {
            let mut state = self.write_state();
            std::mem::replace(&mut state.table, table)
        };
        // Files only referenced by the old table close here, outside the lock.
        drop(previous);

        #[cfg(feature = "tracing")]
        tracing::trace!(target: "logging::router", entries = config.len(), "sink configuration applied");

        Ok(())
    }

    /// Parses a JSON configuration, applies it and returns it.
    pub fn load_config(&self, bytes: &[u8]) -> ConfigResult<Config> {
        let config = Config::from_json(bytes)?;
        self.apply_config(&config)?;
        Ok(config)
    }

    /// Snapshot of the current table.
    pub fn table(&self) -> EmitterTable {
        self.read_state().table.clone()
    }

    /// The emitter currently serving `severity`; `None` for sentinels.
    pub fn emitter(&self, severity: Severity) -> Option<Arc<LineEmitter>> {
        self.read_state().table.emitter(severity)
    }

    /// Reports whether a message at `severity` would reach a visible sink.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.read_state().table.is_enabled(severity)
    }

    /// Writes one line at `severity`, attributed to the caller.
    ///
    /// Write failures are dropped so logging never disturbs the caller.
    #[track_caller]
    pub fn emit(&self, severity: Severity, kvs: &KeyValues<'_>) {
        let _ = self.emit_at(severity, Callsite::caller(), kvs);
    }

    /// Writes one line at `severity` for an explicit callsite.
    pub fn emit_at(
        &self,
        severity: Severity,
        callsite: Callsite,
        kvs: &KeyValues<'_>,
    ) -> io::Result<()> {
        match self.emitter(severity) {
            Some(emitter) if !emitter.is_silent() => {
                emitter.write(callsite, &render_key_values(kvs))
            }
            _ => Ok(()),
        }
    }

    /// Call families for an arbitrary severity.
    pub const fn at(&self, severity: Severity) -> SeverityLogger<'_> {
        SeverityLogger::new(self, severity)
    }

    /// Call families at [`Severity::Debug`].
    pub const fn debug(&self) -> SeverityLogger<'_> {
        self.at(Severity::Debug)
    }

    /// Call families at [`Severity::Info`].
    pub const fn info(&self) -> SeverityLogger<'_> {
        self.at(Severity::Info)
    }

    /// Call families at [`Severity::Warn`].
    pub const fn warn(&self) -> SeverityLogger<'_> {
        self.at(Severity::Warn)
    }

    /// Call families at [`Severity::Error`].
    pub const fn error(&self) -> SeverityLogger<'_> {
        self.at(Severity::Error)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("Logger")
            .field("threshold", &state.threshold)
            .field("live", &state.table.live_severities())
            .finish_non_exhaustive()
    }
}
