//! Tests for error context helpers

use std::error::Error as _;
use std::io;

use tasker_domain::error::Error;
use tasker_infrastructure::error_ext::ErrorContext;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "disk gone"))
}

#[test]
fn context_produces_internal_with_source() {
    let err = io_failure().context("Failed to read").unwrap_err();
    match &err {
        Error::Internal { message, .. } => assert_eq!(message, "Failed to read: disk gone"),
        other => panic!("expected Internal, got {other:?}"),
    }
    assert!(err.source().is_some());
}

#[test]
fn config_context_produces_configuration_error() {
    let err = io_failure().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { ref message, .. } if message == "Bad config: disk gone"));
}

#[test]
fn ok_values_pass_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.context("unused").unwrap(), 7);
}
