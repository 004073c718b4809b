//! Provider registry tests

use std::sync::Arc;

use lumber_application::discovery::{LinkedCatalog, BackendCatalog, ProviderRegistry};
use tracing_test::traced_test;

use crate::support::{BrokenSources, ClassBehaviour, StaticCatalog, StaticSources};

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .class("acme.Alpha", ClassBehaviour::Ok)
        .class("acme.Beta", ClassBehaviour::Ok)
        .class("acme.Gamma", ClassBehaviour::Ok)
        .class("acme.Failing", ClassBehaviour::Fails)
        .class("acme.Panicking", ClassBehaviour::Panics)
}

fn registry(sources: StaticSources) -> ProviderRegistry {
    ProviderRegistry::new(Arc::new(sources), Arc::new(catalog()))
}

#[test]
fn test_descriptors_are_ordered_by_priority() {
    let registry = registry(
        StaticSources::new()
            .provider("a", "acme.Alpha", 5)
            .provider("b", "acme.Beta", 10)
            .provider("c", "acme.Gamma", 2),
    );

    let found = registry.discover();
    let ranked: Vec<_> = found.iter().map(|d| (d.priority, d.class_name.as_str())).collect();
    assert_eq!(
        ranked,
        vec![(2, "acme.Gamma"), (5, "acme.Alpha"), (10, "acme.Beta")]
    );
    assert_eq!(found[2].factory.implementation_name(), "acme.Beta");
    assert_eq!(found[2].source_id, "b");
}

#[test]
fn test_incompatible_versions_are_excluded() {
    let registry = registry(
        StaticSources::new()
            .record(
                "old",
                "LoggerContextFactory = \"acme.Alpha\"\nApiVersion = \"1.9.9\"\nFactoryPriority = 50",
            )
            .record("unversioned", "LoggerContextFactory = \"acme.Beta\"")
            .provider("ok", "acme.Gamma", 1),
    );

    let found = registry.discover();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].class_name, "acme.Gamma");
}

#[traced_test]
#[test]
fn test_incompatible_records_are_excluded_quietly() {
    let registry = registry(
        StaticSources::new()
            .record(
                "old-bad-priority",
                "LoggerContextFactory = \"acme.Alpha\"\nApiVersion = \"1.0.0\"\nFactoryPriority = \"high\"",
            )
            .record(
                "numeric-version",
                "LoggerContextFactory = \"acme.Beta\"\nApiVersion = 2\nFactoryPriority = 3",
            ),
    );

    assert!(registry.discover().is_empty());
    assert!(!logs_contain("Skipping provider"));
    assert!(!logs_contain("ERROR"));
}

#[traced_test]
#[test]
fn test_compatible_record_with_invalid_priority_is_skipped() {
    let registry = registry(
        StaticSources::new()
            .record(
                "bad-priority",
                "LoggerContextFactory = \"acme.Alpha\"\nApiVersion = \"2.0.0\"\nFactoryPriority = \"high\"",
            )
            .provider("good", "acme.Beta", 1),
    );

    let found = registry.discover();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].class_name, "acme.Beta");
    assert!(logs_contain("Skipping provider"));
    assert!(logs_contain("Invalid priority: high"));
}

#[test]
fn test_absent_priority_defaults_to_lowest() {
    let registry = registry(StaticSources::new().record(
        "a",
        "LoggerContextFactory = \"acme.Alpha\"\nApiVersion = \"2.0.0\"",
    ));

    let found = registry.discover();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].priority, -1);
}

#[traced_test]
#[test]
fn test_bad_sources_do_not_abort_discovery() {
    let registry = registry(
        StaticSources::new()
            .record("garbled", "LoggerContextFactory = = nope")
            .provider("missing", "acme.Unknown", 7)
            .provider("failing", "acme.Failing", 8)
            .provider("panicking", "acme.Panicking", 9)
            .provider("good", "acme.Alpha", 3),
    );

    let found = registry.discover();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].class_name, "acme.Alpha");

    assert!(logs_contain("garbled"));
    assert!(logs_contain("acme.Unknown"));
    assert!(logs_contain("acme.Failing"));
    assert!(logs_contain("backend factory panicked"));
}

#[traced_test]
#[test]
fn test_equal_priority_keeps_last_discovered() {
    let registry = registry(
        StaticSources::new()
            .provider("first", "acme.Alpha", 4)
            .provider("second", "acme.Beta", 4),
    );

    let found = registry.discover();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].class_name, "acme.Beta");
    assert_eq!(found[0].source_id, "second");
    assert!(logs_contain("share a priority"));
}

#[test]
fn test_enumeration_failure_yields_nothing() {
    let registry = ProviderRegistry::new(Arc::new(BrokenSources), Arc::new(catalog()));
    assert!(registry.discover().is_empty());
}

#[test]
fn test_record_without_factory_is_ignored() {
    let registry = registry(StaticSources::new().record("a", "ApiVersion = \"2.0.1\""));
    assert!(registry.discover().is_empty());
}

#[test]
fn test_linked_catalog_rejects_unregistered_class() {
    let err = LinkedCatalog
        .instantiate("nobody.Registered", "unit-test")
        .err()
        .expect("unregistered class must fail");
    let text = err.to_string();
    assert!(text.contains("nobody.Registered"));
    assert!(text.contains("unit-test"));
}
