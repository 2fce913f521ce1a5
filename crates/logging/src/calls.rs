//! crates/logging/src/calls.rs
//! The four call families bound to one severity.

use crate::kv::{KeyValues, paired, write_key_values};
use crate::levels::Severity;
use crate::logger::Logger;
use logging_sink::Callsite;
use std::error::Error;
use std::fmt::{self, Write as _};

/// A [`Logger`] paired with one severity.
///
/// Obtained from [`Logger::debug`], [`Logger::info`], [`Logger::warn`],
/// [`Logger::error`] or [`Logger::at`]. Every method attributes the line to
/// its own caller and never reports write failures.
///
/// User key-value lists are paired first, so an odd trailing key is dropped
/// before the `msg`/`err` pairs are framed around the remaining ones.
#[derive(Clone, Copy)]
pub struct SeverityLogger<'a> {
    logger: &'a Logger,
    severity: Severity,
}

impl<'a> SeverityLogger<'a> {
    pub(crate) const fn new(logger: &'a Logger, severity: Severity) -> Self {
        Self { logger, severity }
    }

    /// Severity this handle writes at.
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Reports whether a line written through this handle would be visible.
    pub fn is_enabled(&self) -> bool {
        self.logger.is_enabled(self.severity)
    }

    /// Writes ` k=v` for each pair in `kvs`.
    #[track_caller]
    pub fn raw(&self, kvs: &KeyValues<'_>) {
        let _ = self
            .logger
            .emit_at(self.severity, Callsite::caller(), paired(kvs));
    }

    /// Writes ` msg=<message>` followed by `kvs`.
    #[track_caller]
    pub fn msg(&self, message: &str, kvs: &KeyValues<'_>) {
        let framed = frame(Some(&message), kvs, None);
        let _ = self
            .logger
            .emit_at(self.severity, Callsite::caller(), &framed);
    }

    /// Writes `kvs` followed by ` err=<error>`.
    #[track_caller]
    pub fn err(&self, error: &dyn Error, kvs: &KeyValues<'_>) {
        let framed = frame(None, kvs, Some(&error));
        let _ = self
            .logger
            .emit_at(self.severity, Callsite::caller(), &framed);
    }

    /// Writes ` msg=<message>`, then `kvs`, then ` err=<error>`.
    #[track_caller]
    pub fn msg_err(&self, message: &str, error: &dyn Error, kvs: &KeyValues<'_>) {
        let framed = frame(Some(&message), kvs, Some(&error));
        let _ = self
            .logger
            .emit_at(self.severity, Callsite::caller(), &framed);
    }
}

impl fmt::Debug for SeverityLogger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeverityLogger")
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Builds the flat list `[msg, m, ..paired kvs.., err, e]`.
fn frame<'a>(
    message: Option<&'a &'a str>,
    kvs: &KeyValues<'a>,
    error: Option<&'a &'a dyn Error>,
) -> Vec<&'a dyn fmt::Display> {
    let user = paired(kvs);
    let mut framed: Vec<&dyn fmt::Display> = Vec::with_capacity(user.len() + 4);
    if let Some(message) = message {
        framed.push(&"msg");
        framed.push(message);
    }
    framed.extend_from_slice(user);
    if let Some(error) = error {
        framed.push(&"err");
        framed.push(error);
    }
    framed
}

/// Renders the same framing as [`SeverityLogger::msg_err`] into a string.
///
/// Useful when the body is needed without writing it, as the tracing bridge
/// does.
pub fn render_framed(
    message: Option<&str>,
    kvs: &KeyValues<'_>,
    error: Option<&dyn Error>,
) -> String {
    let mut out = String::new();
    if let Some(message) = message {
        let _ = write!(out, " msg={message}");
    }
    let _ = write_key_values(&mut out, kvs);
    if let Some(error) = error {
        let _ = write!(out, " err={error}");
    }
    out
}
