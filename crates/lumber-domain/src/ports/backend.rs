//! Backend ports
//!
//! A backend is selected once per process and handed every context request.
//! It owns its contexts and loggers, and any caching of them.

use std::fmt;
use std::sync::Arc;

use crate::constants::MESSAGE_PLACEHOLDER;
use crate::ports::appender::AppenderMap;
use crate::value_objects::{IsolationKey, Level, LogEvent};

/// Entry point of a logging backend
pub trait LoggerContextFactory: Send + Sync {
    /// Resolve a logger context
    ///
    /// * `caller` - identity of the calling component, for diagnostics only
    /// * `isolation` - explicit isolation boundary; `None` lets the backend infer it
    /// * `current_context_only` - `true` requests the single process-global context
    fn get_context(
        &self,
        caller: &str,
        isolation: Option<&IsolationKey>,
        current_context_only: bool,
    ) -> Arc<dyn LoggerContext>;

    /// Identifier the implementation is registered under
    fn implementation_name(&self) -> &str;
}

/// Isolation-scoped source of named loggers
pub trait LoggerContext: Send + Sync {
    /// Context name
    fn name(&self) -> &str;

    /// Get or create a logger with the default message factory
    fn get_logger(&self, name: &str) -> Arc<dyn Logger>;

    /// Get or create a logger with a specific message factory
    ///
    /// The factory only applies when the logger is created; later requests
    /// with a different factory return the existing logger.
    fn get_logger_with(&self, name: &str, message_factory: Arc<dyn MessageFactory>)
    -> Arc<dyn Logger>;

    /// Whether a logger with this name has been created
    fn has_logger(&self, name: &str) -> bool;

    /// Replace the appenders this context dispatches to
    ///
    /// Returns `false` when the backend has no appender table.
    fn configure(&self, appenders: Arc<AppenderMap>) -> bool {
        let _ = appenders;
        false
    }
}

/// Named logger handle
pub trait Logger: Send + Sync {
    /// Logger name
    fn name(&self) -> &str;

    /// Threshold level
    fn level(&self) -> Level;

    /// Factory used to render parameterized messages
    fn message_factory(&self) -> Arc<dyn MessageFactory>;

    /// Deliver a fully built event
    fn log_event(&self, event: LogEvent);

    /// Whether events at `level` pass the threshold
    fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.level())
    }

    /// Log a plain message
    fn log(&self, level: Level, message: &str) {
        if self.is_enabled(level) {
            self.log_event(LogEvent::new(self.name(), level, message));
        }
    }

    /// Log a parameterized message rendered by the logger's message factory
    fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]) {
        if self.is_enabled(level) {
            let message = self.message_factory().format(pattern, args);
            self.log_event(LogEvent::new(self.name(), level, message));
        }
    }
}

/// Strategy turning a pattern and arguments into message text
pub trait MessageFactory: Send + Sync {
    /// Factory name, used to detect mismatched requests
    fn name(&self) -> &str;

    /// Render a message
    fn format(&self, pattern: &str, args: &[&dyn fmt::Display]) -> String;
}

/// Replaces each `{}` with the next argument; surplus placeholders stay as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterizedMessageFactory;

impl MessageFactory for ParameterizedMessageFactory {
    fn name(&self) -> &str {
        "parameterized"
    }

    fn format(&self, pattern: &str, args: &[&dyn fmt::Display]) -> String {
        let mut out = String::with_capacity(pattern.len());
        let mut rest = pattern;
        let mut args = args.iter();
        while let Some(pos) = rest.find(MESSAGE_PLACEHOLDER) {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str(MESSAGE_PLACEHOLDER),
            }
            rest = &rest[pos + MESSAGE_PLACEHOLDER.len()..];
        }
        out.push_str(rest);
        out
    }
}
