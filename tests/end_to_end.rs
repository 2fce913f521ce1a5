//! End-to-end scenarios through the `logs` facade.

use logs::sink::{CaptureBuffer, StandardStreams};
use logs::{Config, Logger, Severity, SinkSpec, kvs};
use std::fs;
use std::io;
use tempfile::tempdir;

fn logger() -> (Logger, CaptureBuffer, CaptureBuffer) {
    let out = CaptureBuffer::new();
    let err = CaptureBuffer::new();
    let logger = Logger::with_streams(StandardStreams::new(out.writer(), err.writer()));
    (logger, out, err)
}

#[test]
fn warn_to_stdout_scenario() {
    let (logger, out, err) = logger();
    logger
        .load_config(br#"[{"level": "warn", "stream_type": "stdout"}]"#)
        .expect("load config");

    logger.info().msg("hello", kvs![]);
    let line_of_warn = line!() + 1;
    logger.warn().msg("careful", kvs!["k", "v"]);

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("WARN  "), "{line}");
    assert!(
        line.ends_with(&format!("end_to_end.rs:{line_of_warn}: msg=careful k=v")),
        "{line}"
    );
    assert!(err.is_empty());
}

#[test]
fn key_values_render_in_call_order() {
    let (logger, out, _) = logger();
    logger.info().raw(kvs!["user", 42, "op", "login"]);
    logger.info().raw(kvs!["user", 42, "op"]);

    let lines = out.lines();
    assert!(lines[0].ends_with(": user=42 op=login"));
    assert!(lines[1].ends_with(": user=42"));
}

#[test]
fn routing_and_threshold_compose() {
    let dir = tempdir().expect("create temp dir");
    let audit = dir.path().join("audit.log");
    let (logger, out, err) = logger();
    logger
        .apply_config(
            &Config::new()
                .with(SinkSpec::stdout(Severity::Debug))
                .with(SinkSpec::stderr(Severity::Error))
                .with(SinkSpec::file(Severity::Warn, &audit).with_perm(0o600)),
        )
        .expect("apply config");

    logger.debug().raw(kvs!["step", 1]);
    logger.set_threshold(Severity::Warn);
    logger.debug().raw(kvs!["step", 2]);
    logger.info().raw(kvs!["step", 3]);
    logger.warn().raw(kvs!["step", 4]);
    logger
        .error()
        .msg_err("commit failed", &io::Error::other("locked"), kvs!["tx", 9]);

    // The configuration revived Debug; moving from Info to Warn leaves it live.
    assert_eq!(out.lines().len(), 4);
    assert_eq!(err.lines().len(), 1);
    assert!(err.contents().ends_with(": msg=commit failed tx=9 err=locked\n"));

    let audit = fs::read_to_string(&audit).expect("read audit log");
    let bodies: Vec<_> = audit
        .lines()
        .map(|line| line.rsplit_once(": ").map_or("", |(_, body)| body))
        .collect();
    assert_eq!(bodies, vec!["step=4", "msg=commit failed tx=9 err=locked"]);
}

#[test]
fn silencing_and_restoring_everything() {
    let (logger, out, _) = logger();
    logger.set_threshold(Severity::NoLevels);
    logger.error().msg("muted", kvs![]);
    assert!(out.is_empty());

    logger.set_threshold(Severity::AllLevels);
    logger.debug().msg("back", kvs![]);
    assert_eq!(out.lines().len(), 1);
}

#[test]
fn global_logger_is_shared() {
    assert!(std::ptr::eq(logs::global(), logs::global()));
    assert_eq!(logs::info().severity(), Severity::Info);
}
