//! Declared components
//!
//! Builds the `[[components]]` of a configuration and publishes the
//! resulting appenders to the backend's root contexts.

use std::sync::Arc;

use lumber_application::plugins::PluginFactoryResolver;
use lumber_domain::error::Error;
use lumber_domain::ports::{Appender, AppenderMap, ComponentInstance};
use lumber_domain::value_objects::{ComponentDeclaration, IsolationKey};
use lumber_providers::appender::collect_appenders;
use tracing::{debug, warn};

use crate::constants::MANAGER_CALLER;
use crate::manager::LoggerContextLocator;

/// A top-level declaration that could not be built
#[derive(Debug)]
pub struct ComponentFailure {
    /// `Type[name]` of the declaration
    pub declaration: String,
    /// Why it failed
    pub error: Error,
}

/// Outcome of building a batch of declarations
#[derive(Debug, Default)]
pub struct ComponentReport {
    /// Every appender built, directly or through an appender set
    pub appenders: AppenderMap,
    /// Top-level layouts, which have nothing to attach to
    pub layouts: usize,
    /// Declarations that failed
    pub failures: Vec<ComponentFailure>,
}

impl ComponentReport {
    /// Whether every declaration was built
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build every declaration; failures are recorded, never fatal
pub fn build_components(
    resolver: &PluginFactoryResolver,
    declarations: &[ComponentDeclaration],
) -> ComponentReport {
    let mut built: Vec<Arc<dyn Appender>> = Vec::new();
    let mut report = ComponentReport::default();

    for (declaration, result) in declarations.iter().zip(resolver.build_all(declarations)) {
        match result {
            Ok(ComponentInstance::Appender(appender)) => built.push(appender),
            Ok(ComponentInstance::Appenders(set)) => built.extend(set.values().cloned()),
            Ok(ComponentInstance::Layout(_)) => {
                warn!(component = %declaration, "Top-level layout is not attached to any appender");
                report.layouts += 1;
            }
            Err(error) => report.failures.push(ComponentFailure {
                declaration: declaration.to_string(),
                error,
            }),
        }
    }

    report.appenders = collect_appenders(built);
    report
}

/// Publish appenders to the global context and the default realm's context
///
/// Returns how many of the two contexts accepted the table.
pub fn install(locator: &LoggerContextLocator, appenders: Arc<AppenderMap>) -> usize {
    let default_realm = IsolationKey::default_realm();
    let contexts = [
        locator.get_context(MANAGER_CALLER, None, true),
        locator.get_context(MANAGER_CALLER, Some(&default_realm), false),
    ];
    let accepted = contexts
        .iter()
        .filter(|context| context.configure(Arc::clone(&appenders)))
        .count();
    if accepted == 0 && !appenders.is_empty() {
        warn!(
            backend = locator.backend().implementation_name(),
            "Selected backend does not accept appenders; declared appenders are unused"
        );
    } else {
        debug!(accepted, appenders = appenders.len(), "Installed declared appenders");
    }
    accepted
}
