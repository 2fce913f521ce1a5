//! crates/logging-sink/src/params.rs
//! Per-sink parameters consulted when opening file sinks.

use std::path::{Path, PathBuf};

/// Permission bits applied when a file sink creates its log file.
///
/// Octal `0644`: owner read/write, group and others read-only.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Parameters attached to a sink entry.
///
/// Only [`SinkKind::File`](crate::SinkKind::File) consults them; other kinds
/// ignore whatever is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinkParams {
    /// Path of the log file.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub filename: Option<PathBuf>,
    /// Creation mode of the log file. Falls back to [`DEFAULT_FILE_MODE`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub perm: Option<u32>,
}

impl SinkParams {
    /// Parameters naming a log file with the default creation mode.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            filename: Some(path.into()),
            perm: None,
        }
    }

    /// Overrides the creation mode.
    pub fn with_perm(mut self, perm: u32) -> Self {
        self.perm = Some(perm);
        self
    }

    /// Returns the configured filename, treating an empty path as absent.
    pub fn filename(&self) -> Option<&Path> {
        self.filename
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Returns the creation mode to use for the log file.
    pub fn mode(&self) -> u32 {
        self.perm.unwrap_or(DEFAULT_FILE_MODE)
    }

    /// Reports whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.perm.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_octal_0644() {
        assert_eq!(DEFAULT_FILE_MODE, 420);
        assert_eq!(SinkParams::file("a.log").mode(), 0o644);
    }

    #[test]
    fn explicit_perm_overrides_default() {
        assert_eq!(SinkParams::file("a.log").with_perm(0o600).mode(), 0o600);
    }

    #[test]
    fn empty_filename_is_treated_as_missing() {
        let params = SinkParams::file("");
        assert!(params.filename().is_none());
        assert!(SinkParams::default().filename().is_none());
        assert_eq!(
            SinkParams::file("x.log").filename(),
            Some(Path::new("x.log"))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_optional_fields() {
        let params: SinkParams =
            serde_json::from_str(r#"{"filename": "/var/log/app.log", "perm": 384}"#).unwrap();
        assert_eq!(params.filename(), Some(Path::new("/var/log/app.log")));
        assert_eq!(params.mode(), 0o600);

        let empty: SinkParams = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
