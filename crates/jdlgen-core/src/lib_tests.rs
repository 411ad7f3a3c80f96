#![allow(non_snake_case)]

use super::*;

// LogLevel tests

#[test]
fn LogLevel___ordering___trace_less_than_debug() {
    assert!(LogLevel::Trace < LogLevel::Debug);
}

#[test]
fn LogLevel___ordering___warn_less_than_error() {
    assert!(LogLevel::Warn < LogLevel::Error);
}

#[test]
fn LogLevel___ordering___error_less_than_off() {
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test]
fn LogLevel___from_u8___3_returns_warn() {
    assert_eq!(LogLevel::from_u8(3), LogLevel::Warn);
}

#[test]
fn LogLevel___from_u8___out_of_range_returns_off() {
    assert_eq!(LogLevel::from_u8(200), LogLevel::Off);
}

#[test]
fn LogLevel___display___uppercase_name() {
    assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
}

#[test]
fn LogLevel___from_str___case_insensitive() {
    assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
}

#[test]
fn LogLevel___from_str___unknown_returns_config_error() {
    let result = "chatty".parse::<LogLevel>();

    assert!(matches!(result, Err(CodegenError::ConfigError(_))));
}
