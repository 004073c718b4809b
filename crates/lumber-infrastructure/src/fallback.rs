//! Built-in fallback backend
//!
//! Installed when no provider can be discovered. One context serves every
//! caller and loggers write plain lines to standard error, so application
//! logging keeps working in degraded mode.

use std::io::Write;
use std::sync::Arc;

use dashmap::DashMap;
use lumber_domain::ports::{
    Logger, LoggerContext, LoggerContextFactory, MessageFactory, ParameterizedMessageFactory,
};
use lumber_domain::value_objects::{IsolationKey, Level, LogEvent};
use lumber_providers::appender::format_plain;

use crate::constants::{DEFAULT_FALLBACK_LEVEL, FALLBACK_CLASS_NAME, FALLBACK_CONTEXT_NAME};

/// Minimal backend writing to standard error
#[derive(Debug, Clone)]
pub struct SimpleContextFactory {
    context: Arc<SimpleLoggerContext>,
}

impl Default for SimpleContextFactory {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_LEVEL)
    }
}

impl SimpleContextFactory {
    /// Create a fallback backend with the given threshold
    pub fn new(level: Level) -> Self {
        Self {
            context: Arc::new(SimpleLoggerContext {
                level,
                loggers: DashMap::new(),
            }),
        }
    }

    /// Threshold of every fallback logger
    pub fn level(&self) -> Level {
        self.context.level
    }
}

impl LoggerContextFactory for SimpleContextFactory {
    fn get_context(
        &self,
        _caller: &str,
        _isolation: Option<&IsolationKey>,
        _current_context_only: bool,
    ) -> Arc<dyn LoggerContext> {
        Arc::clone(&self.context) as Arc<dyn LoggerContext>
    }

    fn implementation_name(&self) -> &str {
        FALLBACK_CLASS_NAME
    }
}

#[derive(Debug)]
struct SimpleLoggerContext {
    level: Level,
    loggers: DashMap<String, Arc<SimpleLogger>>,
}

impl LoggerContext for SimpleLoggerContext {
    fn name(&self) -> &str {
        FALLBACK_CONTEXT_NAME
    }

    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.get_logger_with(name, Arc::new(ParameterizedMessageFactory))
    }

    fn get_logger_with(&self, name: &str, message_factory: Arc<dyn MessageFactory>) -> Arc<dyn Logger> {
        if let Some(existing) = self.loggers.get(name).map(|e| Arc::clone(e.value())) {
            return existing;
        }
        let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(SimpleLogger {
                name: name.to_string(),
                level: self.level,
                message_factory,
            })
        });
        Arc::clone(entry.value()) as Arc<dyn Logger>
    }

    fn has_logger(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }
}

struct SimpleLogger {
    name: String,
    level: Level,
    message_factory: Arc<dyn MessageFactory>,
}

impl std::fmt::Debug for SimpleLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleLogger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger for SimpleLogger {
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
        // Nowhere left to report a failing stderr.
        let _ = std::io::stderr().lock().write_all(format_plain(&event).as_bytes());
    }
}
