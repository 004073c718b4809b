//! Standard backend tests

use std::fmt;
use std::sync::Arc;

use lumber_application::discovery::ProviderRegistry;
use lumber_application::registry::lookup_backend;
use lumber_domain::ports::{Appender, AppenderMap, LoggerContextFactory, MessageFactory};
use lumber_domain::value_objects::{IsolationKey, Level, realm};
use lumber_providers::constants::STANDARD_CLASS_NAME;
use lumber_providers::{MemoryAppender, StandardContextFactory};
use tracing_test::traced_test;

#[derive(Debug)]
struct ShoutingFactory;

impl MessageFactory for ShoutingFactory {
    fn name(&self) -> &str {
        "shouting"
    }

    fn format(&self, pattern: &str, _args: &[&dyn fmt::Display]) -> String {
        pattern.to_uppercase()
    }
}

fn single(appender: &Arc<MemoryAppender>) -> Arc<AppenderMap> {
    let mut map = AppenderMap::new();
    map.insert(
        appender.name().to_string(),
        Arc::clone(appender) as Arc<dyn Appender>,
    );
    Arc::new(map)
}

#[test]
fn test_global_context_ignores_isolation() {
    let backend = StandardContextFactory::new();
    let tenant = IsolationKey::new("tenant-a");
    let a = backend.get_context("caller", Some(&tenant), true);
    let b = backend.get_context("caller", None, true);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.name(), "global");
    assert_eq!(backend.realm_count(), 0);
}

#[test]
fn test_isolated_realms_get_distinct_contexts() {
    let backend = StandardContextFactory::new();
    let a = IsolationKey::new("tenant-a");
    let b = IsolationKey::new("tenant-b");
    let ctx_a = backend.get_context("caller", Some(&a), false);
    let ctx_b = backend.get_context("caller", Some(&b), false);
    assert!(!Arc::ptr_eq(&ctx_a, &ctx_b));
    assert!(Arc::ptr_eq(&ctx_a, &backend.get_context("other", Some(&a), false)));
    assert_eq!(ctx_b.name(), "tenant-b");
}

#[test]
fn test_realm_inferred_from_thread() {
    let backend = StandardContextFactory::new();
    let inferred = {
        let _guard = realm::enter(IsolationKey::new("hosted-app"));
        backend.get_context("caller", None, false)
    };
    assert_eq!(inferred.name(), "hosted-app");
    assert_eq!(backend.get_context("caller", None, false).name(), "default");
}

#[test]
fn test_logger_reference_stability() {
    let backend = StandardContextFactory::new();
    let context = backend.get_context("caller", None, false);
    assert!(!context.has_logger("app.db"));
    let first = context.get_logger("app.db");
    let second = context.get_logger("app.db");
    assert!(Arc::ptr_eq(&first, &second));
    assert!(context.has_logger("app.db"));
}

#[test]
#[traced_test]
fn test_first_message_factory_wins() {
    let backend = StandardContextFactory::new();
    let context = backend.get_context("caller", None, false);
    let logger = context.get_logger_with("app.api", Arc::new(ShoutingFactory));
    assert_eq!(logger.message_factory().name(), "shouting");

    let again = context.get_logger("app.api");
    assert!(Arc::ptr_eq(&logger, &again));

    let mismatched = context.get_logger_with(
        "app.api",
        Arc::new(lumber_domain::ports::ParameterizedMessageFactory),
    );
    assert_eq!(mismatched.message_factory().name(), "shouting");
    assert!(logs_contain("different message factory"));
}

#[test]
fn test_loggers_dispatch_to_configured_appenders() {
    let backend = StandardContextFactory::with_level(Level::Info);
    let context = backend.get_context("caller", Some(&IsolationKey::new("dispatch")), false);
    let capture = Arc::new(MemoryAppender::new("capture", None));
    assert!(context.configure(single(&capture)));

    let logger = context.get_logger("svc");
    logger.log(Level::Debug, "filtered");
    logger.log_args(Level::Warn, "{} of {}", &[&3, &"disks"]);

    let text = capture.text();
    assert!(!text.contains("filtered"));
    assert!(text.contains("WARN"));
    assert!(text.contains("svc - 3 of disks"));
}

#[test]
fn test_reconfigure_stops_replaced_appenders() {
    let backend = StandardContextFactory::new();
    let context = backend.get_context("caller", None, true);
    let old = Arc::new(MemoryAppender::new("old", None));
    let new = Arc::new(MemoryAppender::new("new", None));
    context.configure(single(&old));
    context.configure(single(&new));
    context.get_logger("svc").log(Level::Error, "after reload");

    assert!(old.is_stopped());
    assert!(!old.text().contains("after reload"));
    assert!(new.text().contains("after reload"));
}

#[test]
fn test_registered_and_discoverable() {
    let entry = lookup_backend(STANDARD_CLASS_NAME).expect("standard backend registered");
    let backend = (entry.factory)().expect("factory succeeds");
    assert_eq!(backend.implementation_name(), STANDARD_CLASS_NAME);

    let discovered = ProviderRegistry::linked().discover();
    let standard = discovered
        .iter()
        .find(|d| d.class_name == STANDARD_CLASS_NAME)
        .expect("linked record discovered");
    assert_eq!(standard.priority, 10);
    assert_eq!(standard.api_version, "2.0.0");
}
