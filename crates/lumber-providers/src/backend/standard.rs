//! Standard backend
//!
//! Contexts are cached per isolation realm plus one process-global context;
//! loggers are cached per context. Each context owns an [`AppenderTable`]
//! its loggers dispatch enabled events to.
//!
//! ## Context Resolution
//!
//! | `current_context_only` | `isolation` | Context |
//! |------------------------|-------------|---------|
//! | `true` | any | global |
//! | `false` | `Some(key)` | realm `key` |
//! | `false` | `None` | realm of the calling thread, else the default realm |

use std::sync::Arc;

use dashmap::DashMap;
use lumber_application::registry::{
    BACKEND_FACTORIES, BackendFactoryEntry, PROVIDER_SOURCES, ProviderSourceEntry,
};
use lumber_domain::constants::GLOBAL_CONTEXT_NAME;
use lumber_domain::error::Result;
use lumber_domain::ports::{
    AppenderMap, Logger, LoggerContext, LoggerContextFactory, MessageFactory,
    ParameterizedMessageFactory,
};
use lumber_domain::value_objects::{IsolationKey, Level, LogEvent, realm};
use tracing::{debug, error, trace, warn};

use crate::appender::AppenderTable;
use crate::constants::{DEFAULT_LOGGER_LEVEL, STANDARD_CLASS_NAME, STANDARD_SOURCE_ID};

/// Backend with per-realm contexts
pub struct StandardContextFactory {
    level: Level,
    global: Arc<StandardLoggerContext>,
    realms: DashMap<IsolationKey, Arc<StandardLoggerContext>>,
}

impl Default for StandardContextFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardContextFactory {
    /// Create a backend whose loggers use the default threshold
    pub fn new() -> Self {
        Self::with_level(DEFAULT_LOGGER_LEVEL)
    }

    /// Create a backend whose loggers use `level` as threshold
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            global: Arc::new(StandardLoggerContext::new(GLOBAL_CONTEXT_NAME, level)),
            realms: DashMap::new(),
        }
    }

    /// Threshold of newly created loggers
    pub fn level(&self) -> Level {
        self.level
    }

    /// Number of realm contexts created so far
    pub fn realm_count(&self) -> usize {
        self.realms.len()
    }

    fn realm_context(&self, key: IsolationKey) -> Arc<StandardLoggerContext> {
        if let Some(existing) = self.realms.get(&key).map(|e| Arc::clone(e.value())) {
            return existing;
        }
        let realm = key.clone();
        let entry = self.realms.entry(key).or_insert_with(|| {
            debug!(realm = %realm, "Creating logger context");
            Arc::new(StandardLoggerContext::new(realm.as_str(), self.level))
        });
        Arc::clone(entry.value())
    }
}

impl LoggerContextFactory for StandardContextFactory {
    fn get_context(
        &self,
        caller: &str,
        isolation: Option<&IsolationKey>,
        current_context_only: bool,
    ) -> Arc<dyn LoggerContext> {
        if current_context_only {
            return Arc::clone(&self.global) as Arc<dyn LoggerContext>;
        }
        let key = isolation
            .cloned()
            .or_else(realm::current)
            .unwrap_or_else(IsolationKey::default_realm);
        trace!(caller, realm = %key, "Resolving logger context");
        self.realm_context(key)
    }

    fn implementation_name(&self) -> &str {
        STANDARD_CLASS_NAME
    }
}

impl std::fmt::Debug for StandardContextFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardContextFactory")
            .field("level", &self.level)
            .field("realms", &self.realms.len())
            .finish()
    }
}

/// Logger cache and appender table of one realm
pub struct StandardLoggerContext {
    name: String,
    level: Level,
    appenders: Arc<AppenderTable>,
    loggers: DashMap<String, Arc<StandardLogger>>,
    default_factory: Arc<dyn MessageFactory>,
}

impl StandardLoggerContext {
    /// Create an empty context
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
            appenders: Arc::new(AppenderTable::new()),
            loggers: DashMap::new(),
            default_factory: Arc::new(ParameterizedMessageFactory),
        }
    }

    /// Appender table shared by this context's loggers
    pub fn appenders(&self) -> &Arc<AppenderTable> {
        &self.appenders
    }

    fn logger(&self, name: &str, requested: Option<Arc<dyn MessageFactory>>) -> Arc<StandardLogger> {
        let cached = self.loggers.get(name).map(|e| Arc::clone(e.value()));
        let logger = match cached {
            Some(logger) => logger,
            None => {
                let factory = requested
                    .clone()
                    .unwrap_or_else(|| Arc::clone(&self.default_factory));
                let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
                    Arc::new(StandardLogger {
                        name: name.to_string(),
                        level: self.level,
                        message_factory: factory,
                        appenders: Arc::clone(&self.appenders),
                    })
                });
                Arc::clone(entry.value())
            }
        };
        if let Some(requested) =
            requested.filter(|r| r.name() != logger.message_factory.name())
        {
            warn!(
                logger = %name,
                existing = logger.message_factory.name(),
                requested = requested.name(),
                "Logger already created with a different message factory"
            );
        }
        logger
    }
}

impl LoggerContext for StandardLoggerContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.logger(name, None)
    }

    fn get_logger_with(
        &self,
        name: &str,
        message_factory: Arc<dyn MessageFactory>,
    ) -> Arc<dyn Logger> {
        self.logger(name, Some(message_factory))
    }

    fn has_logger(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    fn configure(&self, appenders: Arc<AppenderMap>) -> bool {
        let count = appenders.len();
        let stopped = self.appenders.replace(appenders);
        debug!(context = %self.name, appenders = count, stopped, "Published appender table");
        true
    }
}

impl std::fmt::Debug for StandardLoggerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardLoggerContext")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("loggers", &self.loggers.len())
            .field("appenders", &self.appenders.len())
            .finish()
    }
}

/// Logger dispatching to its context's appender table
pub struct StandardLogger {
    name: String,
    level: Level,
    message_factory: Arc<dyn MessageFactory>,
    appenders: Arc<AppenderTable>,
}

impl Logger for StandardLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        self.level
    }

    fn message_factory(&self) -> Arc<dyn MessageFactory> {
        Arc::clone(&self.message_factory)
    }

    fn log_event(&self, event: LogEvent) {
        if !self.is_enabled(event.level) {
            return;
        }
        for appender in self.appenders.snapshot().values() {
            if let Err(e) = appender.append(&event) {
                error!(logger = %self.name, appender = appender.name(), error = %e, "Appender failed");
            }
        }
    }
}

impl std::fmt::Debug for StandardLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardLogger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("message_factory", &self.message_factory.name())
            .finish_non_exhaustive()
    }
}

fn create_standard() -> Result<Arc<dyn LoggerContextFactory>> {
    Ok(Arc::new(StandardContextFactory::new()))
}

#[linkme::distributed_slice(BACKEND_FACTORIES)]
static STANDARD_BACKEND: BackendFactoryEntry = BackendFactoryEntry {
    class_name: STANDARD_CLASS_NAME,
    description: "Standard backend with per-realm contexts and appender tables",
    factory: create_standard,
};

#[linkme::distributed_slice(PROVIDER_SOURCES)]
static STANDARD_PROVIDER: ProviderSourceEntry = ProviderSourceEntry {
    id: STANDARD_SOURCE_ID,
    metadata: include_str!("../../META-INF/lumber-provider.toml"),
};
