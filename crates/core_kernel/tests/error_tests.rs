//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("pageSize must be at least 1");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "pageSize must be at least 1"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing base path");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "Missing base path"),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    assert!(error.to_string().contains("Validation error"));
}

#[test]
fn test_port_error_kinds_are_exclusive() {
    let not_found = PortError::not_found("gone");
    let invalid = PortError::invalid_input("bad");
    let transport = PortError::transport("connection refused");

    assert!(not_found.is_not_found() && !not_found.is_invalid_input());
    assert!(invalid.is_invalid_input() && !invalid.is_not_found());
    assert!(!transport.is_not_found() && !transport.is_invalid_input());
}

#[test]
fn test_port_error_message_strips_kind() {
    assert_eq!(PortError::invalid_input("Duplicate key").message(), "Duplicate key");
    assert_eq!(
        PortError::upstream(500, "boom", "{}").to_string(),
        "Upstream error 500: boom"
    );
}
