//! Appender port

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::ports::layout::Layout;
use crate::value_objects::LogEvent;

/// Named event sink
pub trait Appender: Send + Sync + std::fmt::Debug {
    /// Unique appender name
    fn name(&self) -> &str;

    /// Write one event
    fn append(&self, event: &LogEvent) -> Result<()>;

    /// Layout used to format events, if any
    fn layout(&self) -> Option<Arc<dyn Layout>>;

    /// Flush and close; writes the layout footer if a header was written
    fn stop(&self) -> Result<()> {
        Ok(())
    }
}

/// Appenders keyed by name
pub type AppenderMap = HashMap<String, Arc<dyn Appender>>;
