//! Error type tests

use lumber_domain::error::Error;

#[test]
fn test_instantiation_error_names_source() {
    let err = Error::instantiation("acme.Backend", "META-INF/lumber-provider.toml", "not registered");
    let text = err.to_string();
    assert!(text.contains("acme.Backend"));
    assert!(text.contains("META-INF/lumber-provider.toml"));
}

#[test]
fn test_build_error_classification() {
    assert!(Error::unknown_component("Nope").is_build_error());
    assert!(Error::coercion("XMLLayout", "complete", "not a bool").is_build_error());
    assert!(Error::missing_parameter("Console", "name").is_build_error());
    assert!(Error::factory("Console", "boom").is_build_error());
    assert!(!Error::discovery("src", "bad").is_build_error());
    assert!(!Error::configuration("bad").is_build_error());
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::IoSimple { .. }));
}
