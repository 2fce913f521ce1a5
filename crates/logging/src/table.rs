//! crates/logging/src/table.rs
//! The four-slot emitter table shared by the ladder and the router.

use crate::levels::Severity;
use logging_sink::{FanOut, LineEmitter, Sink};
use std::sync::Arc;

/// One severity's slot: the routed emitter plus the ladder's mute flag.
#[derive(Clone, Debug)]
struct Slot {
    configured: Arc<LineEmitter>,
    discard: Arc<LineEmitter>,
    live: bool,
}

impl Slot {
    fn new(severity: Severity, targets: FanOut) -> Self {
        Self {
            configured: Arc::new(LineEmitter::new(severity.tag(), targets)),
            discard: Arc::new(LineEmitter::discard(severity.tag())),
            live: true,
        }
    }

    fn effective(&self) -> &Arc<LineEmitter> {
        if self.live {
            &self.configured
        } else {
            &self.discard
        }
    }
}

/// Emitters for Debug, Info, Warn and Error.
///
/// Each slot keeps the emitter the router configured and a live flag. Muting a
/// slot swaps in a discard emitter without dropping the configured one, so
/// un-muting restores the same sinks without reopening anything.
#[derive(Clone, Debug)]
pub struct EmitterTable {
    slots: [Slot; 4],
}

impl EmitterTable {
    /// Table with every slot live and routed to its fan-out, indexed like
    /// [`Severity::REAL`].
    pub fn from_fan_outs(targets: [FanOut; 4]) -> Self {
        let [debug, info, warn, error] = targets;
        Self {
            slots: [
                Slot::new(Severity::Debug, debug),
                Slot::new(Severity::Info, info),
                Slot::new(Severity::Warn, warn),
                Slot::new(Severity::Error, error),
            ],
        }
    }

    /// Table with every slot live and routed to the same single sink.
    pub fn uniform(sink: &Sink) -> Self {
        Self::from_fan_outs(std::array::from_fn(|_| FanOut::single(sink.clone())))
    }

    /// The emitter currently serving `severity`; `None` for sentinels.
    pub fn emitter(&self, severity: Severity) -> Option<Arc<LineEmitter>> {
        self.slot(severity).map(|slot| Arc::clone(slot.effective()))
    }

    /// The routed emitter of `severity`, regardless of muting.
    pub fn configured(&self, severity: Severity) -> Option<&LineEmitter> {
        self.slot(severity).map(|slot| slot.configured.as_ref())
    }

    /// The sinks routed to `severity`, regardless of muting.
    pub fn targets(&self, severity: Severity) -> Option<&FanOut> {
        self.configured(severity).map(LineEmitter::targets)
    }

    /// Reports whether `severity` is un-muted. Sentinels are never live.
    pub fn is_live(&self, severity: Severity) -> bool {
        self.slot(severity).is_some_and(|slot| slot.live)
    }

    /// Reports whether a message at `severity` would reach a visible sink.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.slot(severity)
            .is_some_and(|slot| slot.live && !slot.configured.is_silent())
    }

    /// Real severities currently un-muted.
    pub fn live_severities(&self) -> Vec<Severity> {
        Severity::REAL
            .into_iter()
            .filter(|severity| self.is_live(*severity))
            .collect()
    }

    pub(crate) fn set_live(&mut self, severity: Severity, live: bool) {
        if let Some(index) = severity.slot() {
            self.slots[index].live = live;
        }
    }

    fn slot(&self, severity: Severity) -> Option<&Slot> {
        severity.slot().map(|index| &self.slots[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::CaptureBuffer;

    fn stdout_table() -> (EmitterTable, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        (EmitterTable::uniform(&Sink::Stdout(buffer.writer())), buffer)
    }

    #[test]
    fn fresh_table_is_fully_live() {
        let (table, _) = stdout_table();
        assert_eq!(table.live_severities(), Severity::REAL.to_vec());
        for severity in Severity::REAL {
            assert!(table.is_enabled(severity));
        }
    }

    #[test]
    fn sentinels_have_no_slot() {
        let (table, _) = stdout_table();
        assert!(table.emitter(Severity::AllLevels).is_none());
        assert!(table.emitter(Severity::NoLevels).is_none());
        assert!(!table.is_live(Severity::NoLevels));
    }

    #[test]
    fn emitters_carry_severity_tags() {
        let (table, _) = stdout_table();
        for severity in Severity::REAL {
            assert_eq!(table.emitter(severity).unwrap().tag(), severity.tag());
        }
    }

    #[test]
    fn muting_swaps_in_discard_and_keeps_configuration() {
        let (mut table, _) = stdout_table();
        let configured = table.emitter(Severity::Info).unwrap();

        table.set_live(Severity::Info, false);
        let muted = table.emitter(Severity::Info).unwrap();
        assert!(muted.is_silent());
        assert!(!table.is_enabled(Severity::Info));
        assert_eq!(table.targets(Severity::Info).unwrap().len(), 1);

        table.set_live(Severity::Info, true);
        assert!(Arc::ptr_eq(
            &configured,
            &table.emitter(Severity::Info).unwrap()
        ));
    }

    #[test]
    fn empty_fan_out_is_live_but_not_enabled() {
        let table = EmitterTable::from_fan_outs(Default::default());
        assert!(table.is_live(Severity::Error));
        assert!(!table.is_enabled(Severity::Error));
    }

    #[test]
    fn clones_share_emitters() {
        let (table, _) = stdout_table();
        let snapshot = table.clone();
        for severity in Severity::REAL {
            assert!(Arc::ptr_eq(
                &table.emitter(severity).unwrap(),
                &snapshot.emitter(severity).unwrap()
            ));
        }
    }
}
