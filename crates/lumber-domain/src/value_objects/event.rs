//! Log events

use chrono::Utc;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;

use super::level::Level;

/// Error attached to an event
pub type Thrown = Arc<dyn StdError + Send + Sync>;

/// Code location that produced an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Module path of the caller
    pub module: String,
    /// Function name, when known
    pub function: Option<String>,
    /// Source file
    pub file: String,
    /// Line number
    pub line: u32,
}

impl SourceLocation {
    /// Create a location without a function name
    pub fn new(module: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            module: module.into(),
            function: None,
            file: file.into(),
            line,
        }
    }

    /// Attach the function name
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

/// Capture the [`SourceLocation`] of the invocation site
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::value_objects::SourceLocation::new(module_path!(), file!(), line!())
    };
}

/// A single logging event as seen by layouts and appenders
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Logger name (empty for the root logger)
    pub logger_name: String,
    /// Milliseconds since the Unix epoch
    pub timestamp_millis: i64,
    /// Event level
    pub level: Level,
    /// Name of the emitting thread
    pub thread_name: String,
    /// Rendered message
    pub message: Option<String>,
    /// Nested diagnostic context, outermost first
    pub context_stack: Vec<String>,
    /// Mapped diagnostic context
    pub context_map: BTreeMap<String, String>,
    /// Attached error
    pub thrown: Option<Thrown>,
    /// Caller location
    pub source: Option<SourceLocation>,
}

impl LogEvent {
    /// Create an event stamped with the current time and thread
    pub fn new(logger_name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        let thread = std::thread::current();
        let thread_name = thread
            .name()
            .map_or_else(|| format!("{:?}", thread.id()), str::to_string);
        Self {
            logger_name: logger_name.into(),
            timestamp_millis: Utc::now().timestamp_millis(),
            level,
            thread_name,
            message: Some(message.into()),
            context_stack: Vec::new(),
            context_map: BTreeMap::new(),
            thrown: None,
            source: None,
        }
    }

    /// Override the timestamp
    pub fn with_timestamp(mut self, millis: i64) -> Self {
        self.timestamp_millis = millis;
        self
    }

    /// Override the thread name
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Push a nested diagnostic context entry
    pub fn with_context_entry(mut self, entry: impl Into<String>) -> Self {
        self.context_stack.push(entry.into());
        self
    }

    /// Add a mapped diagnostic context property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context_map.insert(key.into(), value.into());
        self
    }

    /// Attach an error
    pub fn with_thrown(mut self, error: Thrown) -> Self {
        self.thrown = Some(error);
        self
    }

    /// Attach the caller location
    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }
}
