//! crates/logging/src/ladder.rs
//! Threshold transitions over the emitter table.
//!
//! Changing the threshold only touches the severities whose live/muted state
//! actually flips. Lowering the threshold un-mutes `[new, old)`; raising it
//! mutes `[old, new)`. Everything outside that range keeps whatever the router
//! last installed, muted or not.

use crate::levels::{Severity, half_open};
use crate::table::EmitterTable;
use std::cmp::Ordering;

/// The table change implied by moving the threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Same threshold; the table is left alone.
    Unchanged,
    /// Threshold lowered: un-mute `[from, to)`.
    Enable {
        /// New threshold, inclusive.
        from: Severity,
        /// Previous threshold, exclusive.
        to: Severity,
    },
    /// Threshold raised: mute `[from, to)`.
    Disable {
        /// Previous threshold, inclusive.
        from: Severity,
        /// New threshold, exclusive.
        to: Severity,
    },
}

impl Transition {
    /// Plans the move from `current` to `requested`.
    pub fn between(current: Severity, requested: Severity) -> Self {
        match requested.cmp(&current) {
            Ordering::Equal => Self::Unchanged,
            Ordering::Less => Self::Enable {
                from: requested,
                to: current,
            },
            Ordering::Greater => Self::Disable {
                from: current,
                to: requested,
            },
        }
    }

    /// Real severities whose slot this transition rewrites.
    pub fn affected(self) -> impl Iterator<Item = Severity> {
        let (from, to) = match self {
            Self::Unchanged => (Severity::AllLevels, Severity::AllLevels),
            Self::Enable { from, to } | Self::Disable { from, to } => (from, to),
        };
        half_open(from, to)
    }

    /// Rewrites the affected slots of `table`.
    pub(crate) fn apply(self, table: &mut EmitterTable) {
        let live = matches!(self, Self::Enable { .. });
        for severity in self.affected() {
            table.set_live(severity, live);
        }
    }
}
