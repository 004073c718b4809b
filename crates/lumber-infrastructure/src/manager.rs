//! Log manager
//!
//! The selected backend lives in a write-once [`BackendCell`]. The first
//! caller runs selection; concurrent first callers block until it finishes
//! and every later read is lock-free. A [`LoggerContextLocator`] can only be
//! obtained from a resolved cell, so there is no "backend unset" state to
//! handle at call sites.

use std::any::type_name;
use std::sync::{Arc, OnceLock};

use lumber_application::plugins::PluginFactoryResolver;
use lumber_domain::constants::ROOT_LOGGER_NAME;
use lumber_domain::ports::{AppenderMap, Logger, LoggerContext, LoggerContextFactory, MessageFactory};
use lumber_domain::value_objects::{ComponentDeclaration, IsolationKey};
use tracing::{error, warn};

use crate::components::{build_components, install};
use crate::config::{ConfigLoader, LumberConfig};
use crate::constants::MANAGER_CALLER;
use crate::selector::{ContextFactorySelector, SelectedBackend, Selection};

static GLOBAL: BackendCell = BackendCell::new();

/// Write-once holder of the selected backend
#[derive(Debug, Default)]
pub struct BackendCell {
    selected: OnceLock<SelectedBackend>,
}

impl BackendCell {
    /// Create an unresolved cell
    pub const fn new() -> Self {
        Self {
            selected: OnceLock::new(),
        }
    }

    /// The selected backend, running `select` if the cell is unresolved
    ///
    /// `select` runs at most once per cell, even when threads race here.
    pub fn get_or_select<F>(&self, select: F) -> &SelectedBackend
    where
        F: FnOnce() -> SelectedBackend,
    {
        self.selected.get_or_init(select)
    }

    /// Resolve through `selector`; the flag is `true` for the call that selected
    pub fn initialize(&self, selector: &ContextFactorySelector) -> (&SelectedBackend, bool) {
        let mut selected_here = false;
        let selected = self.selected.get_or_init(|| {
            selected_here = true;
            selector.select()
        });
        (selected, selected_here)
    }

    /// The selected backend, if resolved
    pub fn get(&self) -> Option<&SelectedBackend> {
        self.selected.get()
    }

    /// Locator over the selected backend, running `select` if unresolved
    pub fn locator<F>(&self, select: F) -> LoggerContextLocator
    where
        F: FnOnce() -> SelectedBackend,
    {
        LoggerContextLocator::new(Arc::clone(&self.get_or_select(select).factory))
    }
}

/// Stateless facade delegating every request to the selected backend
///
/// Caching of contexts and loggers is the backend's business.
#[derive(Clone)]
pub struct LoggerContextLocator {
    backend: Arc<dyn LoggerContextFactory>,
}

impl LoggerContextLocator {
    /// Locator over a backend
    pub fn new(backend: Arc<dyn LoggerContextFactory>) -> Self {
        Self { backend }
    }

    /// The backend requests are delegated to
    pub fn backend(&self) -> &Arc<dyn LoggerContextFactory> {
        &self.backend
    }

    /// Resolve a logger context
    ///
    /// * `caller` - identity of the calling component, for diagnostics only
    /// * `isolation` - explicit isolation boundary; `None` lets the backend infer it
    /// * `current_context_only` - `true` requests the single process-global context
    pub fn get_context(
        &self,
        caller: &str,
        isolation: Option<&IsolationKey>,
        current_context_only: bool,
    ) -> Arc<dyn LoggerContext> {
        self.backend
            .get_context(caller, isolation, current_context_only)
    }

    /// Logger from the caller's inferred context
    pub fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.get_context(name, None, false).get_logger(name)
    }

    /// Logger with a specific message factory from the caller's inferred context
    pub fn get_logger_with(
        &self,
        name: &str,
        message_factory: Arc<dyn MessageFactory>,
    ) -> Arc<dyn Logger> {
        self.get_context(name, None, false)
            .get_logger_with(name, message_factory)
    }

    /// Logger named after a type
    pub fn get_logger_for<T: ?Sized>(&self) -> Arc<dyn Logger> {
        self.get_logger(type_name::<T>())
    }

    /// The root logger of the caller's inferred context
    pub fn root_logger(&self) -> Arc<dyn Logger> {
        self.get_context(MANAGER_CALLER, None, false)
            .get_logger(ROOT_LOGGER_NAME)
    }
}

impl std::fmt::Debug for LoggerContextLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerContextLocator")
            .field("backend", &self.backend.implementation_name())
            .finish()
    }
}

/// Process-wide entry point
///
/// ```ignore
/// use lumber_infrastructure::manager::LogManager;
///
/// let logger = LogManager::get_logger("app.http");
/// logger.log(Level::Info, "listening");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogManager;

impl LogManager {
    /// Bootstrap from an explicit configuration
    ///
    /// Only the first bootstrap of the process selects a backend and installs
    /// declared components. Later calls return the existing selection and
    /// warn when they request a different override.
    pub fn initialize(config: &LumberConfig) -> &'static SelectedBackend {
        let selector = ContextFactorySelector::from_config(&config.manager);
        let (selected, selected_here) = GLOBAL.initialize(&selector);
        if selected_here {
            install_components(selected, &config.components);
        } else if let Some(requested) = config
            .manager
            .logger_context_factory
            .as_deref()
            .filter(|requested| *requested != selected.implementation_name())
        {
            warn!(
                requested,
                selected = selected.implementation_name(),
                "Logging backend already selected; ignoring the requested override"
            );
        }
        selected
    }

    /// Locator over the process backend, bootstrapping from `lumber.toml`
    /// and the environment on first use
    pub fn locator() -> LoggerContextLocator {
        LoggerContextLocator::new(Arc::clone(&Self::selected().factory))
    }

    /// Logger from the caller's inferred context
    pub fn get_logger(name: &str) -> Arc<dyn Logger> {
        Self::locator().get_logger(name)
    }

    /// Logger named after a type
    pub fn get_logger_for<T: ?Sized>() -> Arc<dyn Logger> {
        Self::locator().get_logger_for::<T>()
    }

    /// Resolve a logger context
    pub fn get_context(
        caller: &str,
        isolation: Option<&IsolationKey>,
        current_context_only: bool,
    ) -> Arc<dyn LoggerContext> {
        Self::locator().get_context(caller, isolation, current_context_only)
    }

    /// How the process backend was chosen, if it has been
    pub fn selection() -> Option<Selection> {
        GLOBAL.get().map(|selected| selected.selection)
    }

    /// Stop the appenders installed in the root contexts
    pub fn shutdown() {
        if let Some(selected) = GLOBAL.get() {
            let locator = LoggerContextLocator::new(Arc::clone(&selected.factory));
            install(&locator, Arc::new(AppenderMap::new()));
        }
    }

    fn selected() -> &'static SelectedBackend {
        if let Some(selected) = GLOBAL.get() {
            return selected;
        }
        let config = ConfigLoader::new().load().unwrap_or_else(|e| {
            error!(error = %e, "Unable to load lumber configuration; using defaults");
            LumberConfig::default()
        });
        Self::initialize(&config)
    }
}

/// Build declared components and publish their appenders
pub fn install_components(selected: &SelectedBackend, components: &[ComponentDeclaration]) {
    if components.is_empty() {
        return;
    }
    let report = build_components(&PluginFactoryResolver::linked(), components);
    let locator = LoggerContextLocator::new(Arc::clone(&selected.factory));
    install(&locator, Arc::new(report.appenders));
}
