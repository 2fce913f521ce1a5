//! crates/logging/src/router.rs
//! Builds an emitter table from a sink configuration.

use crate::config::Config;
use crate::error::ConfigResult;
use crate::levels::Severity;
use crate::table::EmitterTable;
use logging_sink::{FanOut, SinkResolver, StandardStreams};

/// Resolves every entry of `config` and computes the per-severity fan-outs.
///
/// Each entry's sink joins the fan-out of every real severity at or above the
/// entry's threshold, in configuration order. Resolution stops at the first
/// failing entry; sinks opened before it are dropped with the partial result.
pub fn route(config: &Config, streams: &StandardStreams) -> ConfigResult<[FanOut; 4]> {
    let mut resolver = SinkResolver::new(streams);
    let mut fan_outs: [FanOut; 4] = Default::default();

    for spec in config {
        let sink = resolver.resolve(spec.sink_type, &spec.params)?;
        for severity in spec.threshold.and_above() {
            if let Some(index) = severity.slot() {
                fan_outs[index].push(sink.clone());
            }
        }
    }

    Ok(fan_outs)
}

/// Builds a fully live table for `config`.
pub fn build_table(config: &Config, streams: &StandardStreams) -> ConfigResult<EmitterTable> {
    route(config, streams).map(EmitterTable::from_fan_outs)
}

/// Severities whose fan-out contains at least one sink.
pub fn routed_severities(table: &EmitterTable) -> Vec<Severity> {
    Severity::REAL
        .into_iter()
        .filter(|severity| table.targets(*severity).is_some_and(|targets| !targets.is_empty()))
        .collect()
}
