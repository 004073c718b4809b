//! Console appender

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use lumber_application::plugins::PluginArgs;
use lumber_application::registry::{PLUGINS, ParameterKind, ParameterSpec, PluginEntry};
use lumber_domain::error::{Error, Result};
use lumber_domain::ports::{Appender, ComponentInstance, Layout};
use lumber_domain::value_objects::{ElementType, LogEvent};

use super::framed::FramedWriter;
use crate::constants::{CONSOLE_TARGET_STDERR, CONSOLE_TARGET_STDOUT};

/// Standard stream a console appender writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    /// Standard output
    #[default]
    SystemOut,
    /// Standard error
    SystemErr,
}

impl FromStr for ConsoleTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case(CONSOLE_TARGET_STDOUT) {
            Ok(Self::SystemOut)
        } else if s.eq_ignore_ascii_case(CONSOLE_TARGET_STDERR) {
            Ok(Self::SystemErr)
        } else {
            Err(Error::coercion(
                "Console",
                "target",
                format!("expected {CONSOLE_TARGET_STDOUT} or {CONSOLE_TARGET_STDERR}, got {s:?}"),
            ))
        }
    }
}

impl Write for ConsoleTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::SystemOut => io::stdout().lock().write(buf),
            Self::SystemErr => io::stderr().lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::SystemOut => io::stdout().lock().write_all(buf),
            Self::SystemErr => io::stderr().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::SystemOut => io::stdout().flush(),
            Self::SystemErr => io::stderr().flush(),
        }
    }
}

/// Appender writing to standard output or standard error
#[derive(Debug)]
pub struct ConsoleAppender {
    target: ConsoleTarget,
    writer: FramedWriter<ConsoleTarget>,
}

impl ConsoleAppender {
    /// Create a console appender
    pub fn new(name: impl Into<String>, target: ConsoleTarget, layout: Option<Arc<dyn Layout>>) -> Self {
        Self {
            target,
            writer: FramedWriter::new(name, layout, target),
        }
    }

    /// Stream written to
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Appender for ConsoleAppender {
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
        self.writer.stop()
    }
}

fn create_console(args: &PluginArgs) -> Result<ComponentInstance> {
    let name = args.required_text("name")?;
    let target = args
        .text("target")
        .map_or(Ok(ConsoleTarget::default()), ConsoleTarget::from_str)?;
    let layout = args.element("layout").and_then(|c| c.as_layout()).cloned();
    Ok(ComponentInstance::Appender(Arc::new(ConsoleAppender::new(
        name, target, layout,
    ))))
}

#[linkme::distributed_slice(PLUGINS)]
static CONSOLE_PLUGIN: PluginEntry = PluginEntry {
    name: "Console",
    element_type: ElementType::Appender,
    description: "Writes events to standard output or standard error",
    parameters: &[
        ParameterSpec::required("name", ParameterKind::Text),
        ParameterSpec::attr("target", ParameterKind::Text, CONSOLE_TARGET_STDOUT),
        ParameterSpec::element("layout", ElementType::Layout),
    ],
    factory: create_console,
};
