//! Loading sink configurations from JSON documents on disk.

use logs::sink::{CaptureBuffer, SinkKind};
use logs::{Config, ConfigError, Logger, Severity, kvs};
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, body: &str) -> Vec<u8> {
    let path = dir.join("logging.json");
    fs::write(&path, body).expect("write config");
    fs::read(&path).expect("read config")
}

#[test]
fn items_document_routes_to_file_and_stderr() {
    let dir = tempdir().expect("create temp dir");
    let log = dir.path().join("service.log");
    let body = format!(
        r#"{{
            "Items": [
                {{"level": "info", "stream_type": "file", "params": {{"filename": {log:?}}}}},
                {{"level": "error", "stream_type": "stderr"}}
            ]
        }}"#,
        log = log.display().to_string()
    );
    let bytes = write_config(dir.path(), &body);

    let out = CaptureBuffer::new();
    let err = CaptureBuffer::new();
    let logger = Logger::with_writers(out.writer(), err.writer());
    let config = logger.load_config(&bytes).expect("load config");

    assert_eq!(config.len(), 2);
    assert_eq!(config.items[1].sink_type, SinkKind::Stderr);

    logger.info().msg("up", kvs![]);
    logger.error().msg("down", kvs![]);

    assert_eq!(fs::read_to_string(&log).unwrap().lines().count(), 2);
    assert_eq!(err.lines().len(), 1);
    assert!(out.is_empty());
}

#[test]
fn numeric_codes_and_names_mix() {
    let config = Config::from_json(
        br#"[{"level": "DEBUG", "stream_type": 1}, {"level": 5, "stream_type": "discard"}]"#,
    )
    .expect("parse config");

    assert_eq!(config.items[0].threshold, Severity::Debug);
    assert_eq!(config.items[0].sink_type, SinkKind::Stdout);
    assert_eq!(config.items[1].threshold, Severity::NoLevels);
}

#[test]
fn canonical_json_parses_back() {
    let config = Config::from_json(br#"{"items": [{"level": "warn", "stream_type": "stderr"}]}"#)
        .expect("parse config");
    let reparsed = Config::from_json(config.to_json().as_bytes()).expect("reparse");
    assert_eq!(reparsed, config);
}

#[test]
fn empty_documents_silence_the_logger() {
    let documents: [&[u8]; 3] = [b"[]", b"{}", b"{\"Items\": null}"];
    for document in documents {
        let out = CaptureBuffer::new();
        let logger = Logger::with_writers(out.writer(), CaptureBuffer::new().writer());
        let config = logger.load_config(document).expect("load config");
        assert!(config.is_empty());

        logger.error().msg("nowhere", kvs![]);
        assert!(out.is_empty());
    }
}

#[test]
fn malformed_documents_are_rejected() {
    let documents: [&[u8]; 5] = [
        b"not json",
        b"[{\"level\": \"loud\", \"stream_type\": \"stdout\"}]",
        b"[{\"level\": 9, \"stream_type\": \"stdout\"}]",
        b"[{\"level\": \"info\", \"stream_type\": \"socket\"}]",
        b"[{\"stream_type\": \"stdout\"}]",
    ];
    for document in documents {
        let err = Config::from_json(document).expect_err("must fail");
        assert!(matches!(err, ConfigError::Malformed(_)), "{err}");
    }
}
