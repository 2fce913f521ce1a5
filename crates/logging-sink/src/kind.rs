//! crates/logging-sink/src/kind.rs
//! Sink destinations accepted by the configuration layer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Destination class of a configured sink.
///
/// The numeric codes returned by [`SinkKind::code`] match the `stream_type`
/// integers written by older configuration files, so both spellings can be
/// accepted by the loader.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// Swallows every byte.
    Discard,
    /// The process standard output.
    Stdout,
    /// The process standard error.
    Stderr,
    /// A file opened for appending.
    File,
}

impl SinkKind {
    /// All kinds in code order.
    pub const ALL: [Self; 4] = [Self::Discard, Self::Stdout, Self::Stderr, Self::File];

    /// Returns the configuration name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::File => "file",
        }
    }

    /// Returns the numeric configuration code of the kind.
    pub const fn code(self) -> u8 {
        match self {
            Self::Discard => 0,
            Self::Stdout => 1,
            Self::Stderr => 2,
            Self::File => 3,
        }
    }

    /// Maps a numeric configuration code back to a kind.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Discard),
            1 => Some(Self::Stdout),
            2 => Some(Self::Stderr),
            3 => Some(Self::File),
            _ => None,
        }
    }

    /// Parses a configuration name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a sink kind name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown stream type: {0}")]
pub struct ParseSinkKindError(pub String);

impl FromStr for SinkKind {
    type Err = ParseSinkKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseSinkKindError(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::SinkKind;
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    impl Serialize for SinkKind {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    struct SinkKindVisitor;

    impl Visitor<'_> for SinkKindVisitor {
        type Value = SinkKind;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a stream type name or code (discard|stdout|stderr|file, 0-3)")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<SinkKind, E> {
            SinkKind::from_name(value)
                .ok_or_else(|| E::custom(format!("unknown stream type: {value}")))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<SinkKind, E> {
            u8::try_from(value)
                .ok()
                .and_then(SinkKind::from_code)
                .ok_or_else(|| E::custom(format!("unknown stream type code: {value}")))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<SinkKind, E> {
            u64::try_from(value)
                .map_err(|_| E::custom(format!("unknown stream type code: {value}")))
                .and_then(|code| self.visit_u64(code))
        }
    }

    impl<'de> Deserialize<'de> for SinkKind {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(SinkKindVisitor)
        }
    }
}
