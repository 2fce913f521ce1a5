//! crates/logging/src/config.rs
//! Declarative sink configuration and its JSON form.

use crate::error::ConfigResult;
use crate::levels::Severity;
use logging_sink::{SinkKind, SinkParams};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// One routing entry: send severities at or above `threshold` to a sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkSpec {
    /// Lowest severity routed to the sink.
    #[serde(rename = "level")]
    pub threshold: Severity,
    /// Destination class.
    #[serde(rename = "stream_type")]
    pub sink_type: SinkKind,
    /// Destination parameters; only file sinks read them.
    #[serde(default, skip_serializing_if = "SinkParams::is_empty")]
    pub params: SinkParams,
}

impl SinkSpec {
    /// Entry for a sink that needs no parameters.
    pub fn new(threshold: Severity, sink_type: SinkKind) -> Self {
        Self {
            threshold,
            sink_type,
            params: SinkParams::default(),
        }
    }

    /// Entry discarding everything at or above `threshold`.
    pub fn discard(threshold: Severity) -> Self {
        Self::new(threshold, SinkKind::Discard)
    }

    /// Entry routing to standard output.
    pub fn stdout(threshold: Severity) -> Self {
        Self::new(threshold, SinkKind::Stdout)
    }

    /// Entry routing to standard error.
    pub fn stderr(threshold: Severity) -> Self {
        Self::new(threshold, SinkKind::Stderr)
    }

    /// Entry appending to the file at `path`.
    pub fn file(threshold: Severity, path: impl Into<PathBuf>) -> Self {
        Self {
            threshold,
            sink_type: SinkKind::File,
            params: SinkParams::file(path),
        }
    }

    /// Overrides the creation mode of a file entry.
    pub fn with_perm(mut self, perm: u32) -> Self {
        self.params.perm = Some(perm);
        self
    }
}

/// Ordered list of routing entries.
///
/// Order only matters within a severity: sinks listed first are written first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Config {
    /// Entries in configuration order.
    pub items: Vec<SinkSpec>,
}

impl Config {
    /// Empty configuration; applying it silences every severity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn with(mut self, spec: SinkSpec) -> Self {
        self.items.push(spec);
        self
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SinkSpec> {
        self.items.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parses the JSON form.
    ///
    /// Accepts either a bare array of entries or an object carrying them under
    /// `Items` (or `items`). An object without entries, or a `null` entry
    /// list, yields an empty configuration.
    ///
    /// ```
    /// use logging::{Config, Severity};
    ///
    /// let config = Config::from_json(br#"[{"level": "warn", "stream_type": "stderr"}]"#).unwrap();
    /// assert_eq!(config.items[0].threshold, Severity::Warn);
    /// ```
    pub fn from_json(bytes: &[u8]) -> ConfigResult<Self> {
        let document: Value = serde_json::from_slice(bytes)?;
        let entries = match document {
            Value::Object(mut fields) => fields
                .remove("Items")
                .or_else(|| fields.remove("items"))
                .unwrap_or(Value::Null),
            other => other,
        };
        if entries.is_null() {
            return Ok(Self::default());
        }
        let items = serde_json::from_value(entries)?;
        Ok(Self { items })
    }

    /// Renders the canonical JSON form (a bare array with names).
    pub fn to_json(&self) -> String {
        // Every field serializes to a JSON string, number or object.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<Vec<SinkSpec>> for Config {
    fn from(items: Vec<SinkSpec>) -> Self {
        Self { items }
    }
}

impl FromIterator<SinkSpec> for Config {
    fn from_iter<I: IntoIterator<Item = SinkSpec>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = &'a SinkSpec;
    type IntoIter = std::slice::Iter<'a, SinkSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
