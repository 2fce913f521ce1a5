//! crates/logging/src/levels.rs
//! Ordered severities and the range helpers built on their ordering.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Message severity, also used as a threshold.
///
/// The order is total: `AllLevels < Debug < Info < Warn < Error < NoLevels`.
/// The two sentinels never tag a message; as thresholds they mean
/// "everything" and "nothing".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Lower bound: every real severity is at or above it.
    AllLevels,
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected but recoverable.
    Warn,
    /// A failure.
    Error,
    /// Upper bound: no real severity reaches it.
    NoLevels,
}

impl Severity {
    /// The four real severities in ascending order.
    pub const REAL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Every value in ascending order, sentinels included.
    pub const ALL: [Self; 6] = [
        Self::AllLevels,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::NoLevels,
    ];

    /// Reports whether this is one of the four message severities.
    pub const fn is_real(self) -> bool {
        !matches!(self, Self::AllLevels | Self::NoLevels)
    }

    /// Position of a real severity in [`REAL`](Self::REAL).
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::Debug => Some(0),
            Self::Info => Some(1),
            Self::Warn => Some(2),
            Self::Error => Some(3),
            Self::AllLevels | Self::NoLevels => None,
        }
    }

    /// Numeric configuration code, `0` for `AllLevels` through `5` for `NoLevels`.
    pub const fn code(self) -> u8 {
        match self {
            Self::AllLevels => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warn => 3,
            Self::Error => 4,
            Self::NoLevels => 5,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::AllLevels),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::NoLevels),
            _ => None,
        }
    }

    /// Configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AllLevels => "all",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::NoLevels => "none",
        }
    }

    /// Fixed-width tag written at the start of each line. Empty for sentinels.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG ",
            Self::Info => "INFO  ",
            Self::Warn => "WARN  ",
            Self::Error => "ERROR ",
            Self::AllLevels | Self::NoLevels => "",
        }
    }

    /// Parses a configuration name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(name))
    }

    /// Real severities at or above `self`.
    ///
    /// `AllLevels` yields all four and `NoLevels` yields none.
    pub fn and_above(self) -> impl Iterator<Item = Self> {
        Self::REAL.into_iter().filter(move |severity| *severity >= self)
    }
}

/// Real severities in the half-open range `[from, to)`.
///
/// The start is inclusive and the end exclusive; sentinel bounds simply widen
/// or close the range, they are never yielded themselves.
pub fn half_open(from: Severity, to: Severity) -> impl Iterator<Item = Severity> {
    Severity::REAL
        .into_iter()
        .filter(move |severity| from <= *severity && *severity < to)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseSeverityError(s.to_owned()))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct SeverityVisitor;

impl Visitor<'_> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a log level name or code (all|debug|info|warn|error|none, 0-5)")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
        Severity::from_name(value).ok_or_else(|| E::custom(format!("unknown log level: {value}")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
        u8::try_from(value)
            .ok()
            .and_then(Severity::from_code)
            .ok_or_else(|| E::custom(format!("unknown log level code: {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Severity, E> {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("unknown log level code: {value}")))
            .and_then(|code| self.visit_u64(code))
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}
