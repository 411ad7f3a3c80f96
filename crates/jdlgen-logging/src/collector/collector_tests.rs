#![allow(non_snake_case)]

use super::*;

#[test]
fn DiagnosticsCollector___new___is_empty() {
    let collector = DiagnosticsCollector::new();

    assert!(collector.entries().is_empty());
    assert_eq!(collector.warning_count(), 0);
    assert_eq!(collector.error_count(), 0);
}

#[test]
fn DiagnosticsCollector___record___keeps_warnings_and_errors() {
    let collector = DiagnosticsCollector::new();

    collector.record(LogLevel::Warn, "jdlgen_model", "dual scope");
    collector.record(LogLevel::Error, "jdlgen_cli", "failed");
    collector.record(LogLevel::Warn, "jdlgen_model", "another");

    assert_eq!(collector.warning_count(), 2);
    assert_eq!(collector.error_count(), 1);
}

#[test]
fn DiagnosticsCollector___record___ignores_info_and_below() {
    let collector = DiagnosticsCollector::new();

    collector.record(LogLevel::Trace, "t", "trace");
    collector.record(LogLevel::Debug, "t", "debug");
    collector.record(LogLevel::Info, "t", "info");
    collector.record(LogLevel::Off, "t", "off");

    assert!(collector.entries().is_empty());
}

#[test]
fn DiagnosticsCollector___entries___preserve_order_and_content() {
    let collector = DiagnosticsCollector::new();

    collector.record(LogLevel::Warn, "first", "one");
    collector.record(LogLevel::Error, "second", "two");

    assert_eq!(
        collector.entries(),
        vec![
            Diagnostic {
                level: LogLevel::Warn,
                target: "first".into(),
                message: "one".into()
            },
            Diagnostic {
                level: LogLevel::Error,
                target: "second".into(),
                message: "two".into()
            },
        ]
    );
}

#[test]
fn DiagnosticsCollector___clear___drops_entries() {
    let collector = DiagnosticsCollector::new();
    collector.record(LogLevel::Warn, "t", "w");

    collector.clear();

    assert_eq!(collector.warning_count(), 0);
}

#[test]
fn DiagnosticsCollector___global___same_instance() {
    let a = DiagnosticsCollector::global() as *const _;
    let b = DiagnosticsCollector::global() as *const _;

    assert_eq!(a, b);
}
