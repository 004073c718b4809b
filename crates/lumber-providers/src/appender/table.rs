//! Atomically published appender mapping

use std::sync::Arc;

use arc_swap::ArcSwap;
use lumber_domain::ports::{Appender, AppenderMap};
use tracing::warn;

/// The appenders a context currently dispatches to
///
/// Readers take a snapshot with [`snapshot`](Self::snapshot) and never
/// observe a mapping while it is being built; writers publish a complete
/// replacement with [`replace`](Self::replace).
#[derive(Debug)]
pub struct AppenderTable {
    current: ArcSwap<AppenderMap>,
}

impl Default for AppenderTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AppenderTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(AppenderMap::new()),
        }
    }

    /// Current mapping
    pub fn snapshot(&self) -> Arc<AppenderMap> {
        self.current.load_full()
    }

    /// Find an appender in the current mapping
    pub fn get(&self, name: &str) -> Option<Arc<dyn Appender>> {
        self.current.load().get(name).cloned()
    }

    /// Number of appenders in the current mapping
    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    /// Whether the current mapping is empty
    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Publish a new mapping and stop the appenders it no longer contains
    ///
    /// Returns the number of appenders stopped.
    pub fn replace(&self, next: Arc<AppenderMap>) -> usize {
        let previous = self.current.swap(Arc::clone(&next));
        let mut stopped = 0;
        for (name, appender) in previous.iter() {
            let retained = next
                .get(name)
                .is_some_and(|kept| Arc::ptr_eq(kept, appender));
            if retained {
                continue;
            }
            if let Err(e) = appender.stop() {
                warn!(appender = %name, error = %e, "Failed to stop replaced appender");
            }
            stopped += 1;
        }
        stopped
    }
}
