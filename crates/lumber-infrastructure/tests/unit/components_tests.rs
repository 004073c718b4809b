//! Declared component build and install tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use lumber_application::plugins::{FactoryBinding, PluginArgs, PluginFactoryResolver};
use lumber_application::registry::{ParameterKind, ParameterSpec, PluginEntry};
use lumber_domain::error::Result;
use lumber_domain::ports::{Appender, AppenderMap, ComponentInstance, Layout};
use lumber_domain::value_objects::{
    Charset, ComponentDeclaration, ElementType, IsolationKey, Level, LogEvent,
};
use lumber_infrastructure::components::{build_components, install};
use lumber_infrastructure::fallback::SimpleContextFactory;
use lumber_infrastructure::manager::LoggerContextLocator;
use lumber_providers::StandardContextFactory;
use tracing_test::traced_test;

use crate::support::NamedBackend;

/// Appender keeping the messages it receives
#[derive(Debug, Default)]
struct RecordingAppender {
    name: String,
    received: Mutex<Vec<String>>,
    stopped: Mutex<bool>,
}

impl RecordingAppender {
    fn messages(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_stopped(&self) -> bool {
        *self.stopped.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Appender for RecordingAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, event: &LogEvent) -> Result<()> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.message.clone().unwrap_or_default());
        Ok(())
    }

    fn layout(&self) -> Option<Arc<dyn Layout>> {
        None
    }

    fn stop(&self) -> Result<()> {
        *self.stopped.lock().unwrap_or_else(PoisonError::into_inner) = true;
        Ok(())
    }
}

#[derive(Debug)]
struct BareLayout;

impl Layout for BareLayout {
    fn to_serializable(&self, event: &LogEvent) -> String {
        event.message.clone().unwrap_or_default()
    }

    fn header(&self) -> Option<Vec<u8>> {
        None
    }

    fn footer(&self) -> Option<Vec<u8>> {
        None
    }

    fn charset(&self) -> Charset {
        Charset::Utf8
    }
}

static RECORDING: PluginEntry = PluginEntry {
    name: "Recording",
    element_type: ElementType::Appender,
    description: "test appender",
    parameters: &[ParameterSpec::required("name", ParameterKind::Text)],
    factory: |args: &PluginArgs| {
        Ok(ComponentInstance::Appender(Arc::new(RecordingAppender {
            name: args.required_text("name")?.to_string(),
            ..Default::default()
        })))
    },
};

static RECORDING_PAIR: PluginEntry = PluginEntry {
    name: "RecordingPair",
    element_type: ElementType::Appenders,
    description: "two test appenders at once",
    parameters: &[ParameterSpec::required("prefix", ParameterKind::Text)],
    factory: |args: &PluginArgs| {
        let prefix = args.required_text("prefix")?;
        let mut set: AppenderMap = HashMap::new();
        for suffix in ["a", "b"] {
            let name = format!("{prefix}-{suffix}");
            set.insert(
                name.clone(),
                Arc::new(RecordingAppender {
                    name,
                    ..Default::default()
                }),
            );
        }
        Ok(ComponentInstance::Appenders(Arc::new(set)))
    },
};

static BARE_LAYOUT: PluginEntry = PluginEntry {
    name: "BareLayout",
    element_type: ElementType::Layout,
    description: "test layout",
    parameters: &[],
    factory: |_: &PluginArgs| Ok(ComponentInstance::Layout(Arc::new(BareLayout))),
};

fn resolver() -> PluginFactoryResolver {
    PluginFactoryResolver::new(FactoryBinding::from_entries([
        &RECORDING,
        &RECORDING_PAIR,
        &BARE_LAYOUT,
    ]))
}

fn recording(name: &str) -> ComponentDeclaration {
    ComponentDeclaration::new("Recording").with_attribute("name", name)
}

fn shared(appender: &Arc<RecordingAppender>) -> Arc<AppenderMap> {
    let mut map: AppenderMap = HashMap::new();
    map.insert(
        appender.name.clone(),
        Arc::clone(appender) as Arc<dyn Appender>,
    );
    Arc::new(map)
}

#[test]
fn test_failures_are_isolated() {
    let declarations = [
        recording("first"),
        ComponentDeclaration::new("Recording"),
        ComponentDeclaration::new("NoSuchPlugin"),
        recording("second"),
    ];

    let report = build_components(&resolver(), &declarations);

    assert!(!report.is_clean());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].declaration, "Recording");
    assert_eq!(report.failures[1].declaration, "NoSuchPlugin");
    assert!(report.failures.iter().all(|f| f.error.is_build_error()));

    let mut names: Vec<_> = report.appenders.keys().cloned().collect();
    names.sort();
    assert_eq!(names, ["first", "second"]);
}

#[test]
#[traced_test]
fn test_sets_are_flattened_and_layouts_counted() {
    let declarations = [
        ComponentDeclaration::new("RecordingPair").with_attribute("prefix", "pair"),
        ComponentDeclaration::new("BareLayout"),
        recording("solo"),
    ];

    let report = build_components(&resolver(), &declarations);

    assert!(report.is_clean());
    assert_eq!(report.layouts, 1);
    assert_eq!(report.appenders.len(), 3);
    assert!(report.appenders.contains_key("pair-a"));
    assert!(report.appenders.contains_key("pair-b"));
    assert!(logs_contain("Top-level layout is not attached to any appender"));
}

#[test]
fn test_install_reaches_standard_contexts() {
    let locator = LoggerContextLocator::new(Arc::new(StandardContextFactory::new()));
    let sink = Arc::new(RecordingAppender {
        name: "sink".to_string(),
        ..Default::default()
    });

    assert_eq!(install(&locator, shared(&sink)), 2);

    locator
        .get_context("test", None, true)
        .get_logger("app")
        .log(Level::Error, "global");
    locator
        .get_context("test", Some(&IsolationKey::default_realm()), false)
        .get_logger("app")
        .log(Level::Error, "default realm");
    locator
        .get_context("test", Some(&IsolationKey::new("plugin-a")), false)
        .get_logger("app")
        .log(Level::Error, "elsewhere");

    assert_eq!(sink.messages(), ["global", "default realm"]);
}

#[test]
fn test_reinstall_stops_previous_appenders() {
    let locator = LoggerContextLocator::new(Arc::new(StandardContextFactory::new()));
    let first = Arc::new(RecordingAppender {
        name: "old".to_string(),
        ..Default::default()
    });

    install(&locator, shared(&first));
    assert!(!first.is_stopped());

    install(&locator, Arc::new(AppenderMap::new()));
    assert!(first.is_stopped());
}

#[test]
fn test_delegating_backend_accepts_appenders() {
    let locator = LoggerContextLocator::new(Arc::new(NamedBackend::new("test.Named")));
    let report = build_components(&resolver(), &[recording("delegated")]);
    assert_eq!(install(&locator, Arc::new(report.appenders)), 2);
}

#[test]
#[traced_test]
fn test_backend_without_appender_table_warns() {
    let locator = LoggerContextLocator::new(Arc::new(SimpleContextFactory::default()));
    let report = build_components(&resolver(), &[recording("unused")]);

    assert_eq!(install(&locator, Arc::new(report.appenders)), 0);
    assert!(logs_contain("Selected backend does not accept appenders"));
}
