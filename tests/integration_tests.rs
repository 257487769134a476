//! Integration tests for the leveled logger registry
//!
//! These tests verify:
//! - Registry identity and root handling
//! - Threshold gating for plain and formatted emission
//! - Output and flag configuration
//! - Parent snapshots at creation time
//! - File destinations

use regex::Regex;
use rust_vlog::prelude::*;
use rust_vlog::{criticalf, tracef};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn validate(pattern: &str, output: &str) {
    let re = Regex::new(pattern).expect("valid pattern");
    assert!(
        re.is_match(output),
        "pattern {:?} did not match log output {:?}",
        pattern,
        output
    );
}

fn registry_with_memory() -> (Registry, MemoryAppender) {
    let memory = MemoryAppender::new();
    let registry = Registry::builder().root_output(memory.output()).build();
    (registry, memory)
}

#[test]
fn test_get_logger_returns_same_instance() {
    let registry = Registry::new();
    let other = registry.get_logger("other", None);

    let first = registry.get_logger("svc", None);
    let second = registry.get_logger("svc", Some(&other));

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_empty_name_returns_root() {
    let registry = Registry::new();
    let parent = registry.get_logger("parent", None);

    assert!(Arc::ptr_eq(&registry.get_logger("", None), &registry.root()));
    assert!(Arc::ptr_eq(&registry.get_logger("", Some(&parent)), &registry.root()));
}

#[test]
fn test_scenario_trace_with_default_threshold() {
    let (registry, memory) = registry_with_memory();
    let svc = registry.get_logger("svc", None);

    svc.trace("ready");

    validate("svc .* trace ready", &memory.contents());
}

#[test]
fn test_scenario_threshold_info() {
    let (registry, memory) = registry_with_memory();
    let svc = registry.get_logger("svc", None);
    svc.set_level(LogLevel::Info);

    svc.debugf(format_args!("{}", 5));
    assert!(memory.is_empty(), "debug must not reach the destination");

    svc.warnf(format_args!("x={}", 5));
    validate("svc .* warn x=5", &memory.contents());
}

#[test]
fn test_scenario_child_uses_parent_snapshot() {
    let registry = Registry::new();
    let parent_buffer = MemoryAppender::new();
    let parent = registry.get_logger("parent", None);
    parent.set_output(parent_buffer.output());
    parent.set_flags(Flags::SHORT_FILE);

    let child = registry.get_logger("child", Some(&parent));

    // moving the parent elsewhere must not move the child
    let elsewhere = MemoryAppender::new();
    parent.set_output(elsewhere.output());
    parent.set_flags(Flags::NONE);

    child.info("hello");

    validate(r"^child integration_tests\.rs:\d+: info hello\n$", &parent_buffer.contents());
    assert!(elsewhere.is_empty());
}

#[test]
fn test_scenario_independent_loggers() {
    let registry = Registry::new();
    let buf_a = MemoryAppender::new();
    let buf_b = MemoryAppender::new();

    let a = registry.get_logger("a", None);
    let b = registry.get_logger("b", None);
    a.set_output(buf_a.output());
    b.set_output(buf_b.output());
    b.set_flags(Flags::NONE);
    a.set_level(LogLevel::Critical);

    assert_eq!(b.level(), LogLevel::Trace);

    a.error("dropped");
    b.error("kept");

    assert!(buf_a.is_empty());
    assert_eq!(buf_b.contents(), "b error kept\n");
}

#[test]
fn test_emission_matrix() {
    for threshold in LogLevel::ALL {
        for level in LogLevel::ALL {
            let (registry, memory) = registry_with_memory();
            let logger = registry.get_logger("lg", None);
            logger.set_level(threshold);

            logger.log(level, "hello!");
            logger.logf(level, format_args!("{}", "hello!"));

            if level >= threshold {
                let expected = format!(r" {}hello!\n", level.tag());
                validate(&expected, &memory.contents());
                assert_eq!(memory.lines().len(), 2);
            } else {
                assert_eq!(memory.len(), 0, "{:?} leaked through {:?}", level, threshold);
            }
        }
    }
}

#[test]
fn test_set_level_visible_to_every_holder() {
    let (registry, memory) = registry_with_memory();
    let first = registry.get_logger("shared", None);
    let second = registry.get_logger("shared", None);

    first.info("before");
    second.set_level(LogLevel::Warn);
    first.info("after");

    assert_eq!(first.level(), LogLevel::Warn);
    let lines = memory.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("info before"));
}

#[test]
fn test_set_output_round_trip() {
    let registry = Registry::new();
    let logger = registry.get_logger("svc", None);
    let output = Output::discard();

    logger.set_output(output.clone());

    assert_eq!(logger.output(), output);
}

#[test]
fn test_set_flags_reflected_in_prefix() {
    let (registry, memory) = registry_with_memory();
    let logger = registry.get_logger("svc", None);

    logger.set_flags(Flags::NONE);
    logger.info("bare");
    logger.set_flags(Flags::DATE | Flags::TIME);
    logger.info("dated");
    logger.set_flags(Flags::MICROSECONDS | Flags::UTC);
    logger.info("micro");
    logger.set_flags(Flags::STANDARD | Flags::NAME_AFTER_HEADER);
    logger.info("named");

    let lines = memory.lines();
    assert_eq!(lines[0], "svc info bare");
    validate(r"^svc \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} info dated$", &lines[1]);
    validate(r"^svc \d{2}:\d{2}:\d{2}\.\d{6} info micro$", &lines[2]);
    validate(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} svc info named$", &lines[3]);
}

#[test]
fn test_default_root_flags_shape() {
    let (registry, memory) = registry_with_memory();
    let logger = registry.get_logger("svc", None);

    logger.critical("down");

    validate(
        r"^svc \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} integration_tests\.rs:\d+: critical down\n$",
        &memory.contents(),
    );
}

#[test]
fn test_root_logger_has_no_name_prefix() {
    let memory = MemoryAppender::new();
    let registry = Registry::builder()
        .root_output(memory.output())
        .root_flags(Flags::NONE)
        .build();

    registry.root().warn("careful");

    assert_eq!(memory.contents(), "warn careful\n");
}

#[test]
fn test_log_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("file-logger.log");

    let registry = Registry::new();
    let logger = registry.get_logger("file-logger", None);
    let appender = FileAppender::new(&log_file).expect("Failed to create appender");
    logger.set_output(appender.into_output());

    tracef!(logger, "{}", "Hello!");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    validate("file-logger .* trace Hello!", &content);
}

#[cfg(feature = "file")]
#[test]
fn test_log_file_with_locking() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("locked.log");

    let registry = Registry::builder().root_flags(Flags::NONE).build();
    let logger = registry.get_logger("locked", None);
    let appender = FileAppender::new(&log_file)
        .and_then(FileAppender::with_locking)
        .expect("Failed to create appender");
    logger.set_output(appender.into_output());

    criticalf!(logger, "{}", "Hello!");
    logger.critical("again");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "locked critical Hello!\nlocked critical again\n");
}

#[test]
fn test_names_track_creation() {
    let registry = Registry::new();
    registry.get_logger("b", None);
    registry.get_logger("a", None);
    registry.get_logger("", None);

    assert_eq!(registry.names(), vec!["", "a", "b"]);
    assert_eq!(registry.logger_count(), 3);
    assert!(registry.contains("a"));
    assert!(!registry.contains("c"));
}
