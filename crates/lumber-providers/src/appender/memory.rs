//! In-memory appender
//!
//! Captures formatted output in a byte buffer. Instances built from
//! configuration are also published by name so the output can be read back
//! after events were dispatched through a context. Publishing happens when the
//! plugin factory runs; the entry is dropped again when that instance stops.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use lumber_application::plugins::PluginArgs;
use lumber_application::registry::{PLUGINS, ParameterKind, ParameterSpec, PluginEntry};
use lumber_domain::error::Result;
use lumber_domain::ports::{Appender, ComponentInstance, Layout};
use lumber_domain::value_objects::{ElementType, LogEvent};
use tracing::debug;

use super::framed::FramedWriter;

static PUBLISHED: LazyLock<DashMap<String, Arc<MemoryAppender>>> = LazyLock::new(DashMap::new);

/// Appender capturing output in memory
#[derive(Debug)]
pub struct MemoryAppender {
    writer: FramedWriter<Vec<u8>>,
}

impl MemoryAppender {
    /// Create an unpublished memory appender
    pub fn new(name: impl Into<String>, layout: Option<Arc<dyn Layout>>) -> Self {
        Self {
            writer: FramedWriter::new(name, layout, Vec::new()),
        }
    }

    /// Create a memory appender and publish it under its name
    ///
    /// A previously published appender with the same name is replaced. The
    /// entry lives until this instance is stopped; handles obtained through
    /// [`MemoryAppender::lookup`] stay readable afterwards.
    pub fn published(name: impl Into<String>, layout: Option<Arc<dyn Layout>>) -> Arc<Self> {
        let appender = Arc::new(Self::new(name, layout));
        let name = appender.name().to_string();
        if PUBLISHED.insert(name.clone(), Arc::clone(&appender)).is_some() {
            debug!(appender = %name, "Replaced published memory appender");
        }
        appender
    }

    /// Find a published appender
    pub fn lookup(name: &str) -> Option<Arc<Self>> {
        PUBLISHED.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Captured bytes
    pub fn contents(&self) -> Vec<u8> {
        self.writer.inspect(Clone::clone)
    }

    /// Captured bytes decoded as UTF-8, lossily
    pub fn text(&self) -> String {
        self.writer
            .inspect(|buf| String::from_utf8_lossy(buf).into_owned())
    }

    /// Whether the appender has been stopped
    pub fn is_stopped(&self) -> bool {
        self.writer.is_stopped()
    }
}

impl Appender for MemoryAppender {
    fn name(&self) -> &str {
        self.writer.name()
    }

    fn append(&self, event: &LogEvent) -> Result<()> {
        self.writer.write_event(event)
    }

    fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.writer.layout()
    }

    fn stop(&self) -> Result<()> {
        let stopped = self.writer.stop();
        // Only the instance currently published under the name unpublishes it
        if PUBLISHED
            .remove_if(self.name(), |_, published| std::ptr::eq(Arc::as_ptr(published), self))
            .is_some()
        {
            debug!(appender = %self.name(), "Unpublished memory appender");
        }
        stopped
    }
}

fn create_memory(args: &PluginArgs) -> Result<ComponentInstance> {
    let name = args.required_text("name")?;
    let layout = args.element("layout").and_then(|c| c.as_layout()).cloned();
    Ok(ComponentInstance::Appender(MemoryAppender::published(
        name, layout,
    )))
}

#[linkme::distributed_slice(PLUGINS)]
static MEMORY_PLUGIN: PluginEntry = PluginEntry {
    name: "Memory",
    element_type: ElementType::Appender,
    description: "Captures events in memory, readable by appender name",
    parameters: &[
        ParameterSpec::required("name", ParameterKind::Text),
        ParameterSpec::element("layout", ElementType::Layout),
    ],
    factory: create_memory,
};
