//! Error context extension tests

use std::io;

use lumber_domain::error::Error;
use lumber_infrastructure::error_ext::ErrorContext;

fn missing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_config_context() {
    let err = missing().config_context("Failed to extract configuration").unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert_eq!(
        err.to_string(),
        "Configuration error: Failed to extract configuration: no such file"
    );
}

#[test]
fn test_context_is_infrastructure_and_keeps_source() {
    let err = missing().context("Installing subscriber").unwrap_err();
    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Installing subscriber: no such file"));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("no such file"));
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.context("unused").ok(), Some(7));
}
