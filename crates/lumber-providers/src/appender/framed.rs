//! Header/footer framing shared by the appenders

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lumber_domain::constants::ROOT_LOGGER_LABEL;
use lumber_domain::error::{Error, Result};
use lumber_domain::ports::Layout;
use lumber_domain::value_objects::LogEvent;

use crate::layout::throwable::throwable_lines;

/// Writes layout output to a sink, framing it with the layout's header and footer
///
/// The header is written before the first event (or at stop time when no
/// event was ever written), the footer exactly once on [`stop`](Self::stop).
/// Events are formatted outside the lock; only the write is serialized.
#[derive(Debug)]
pub struct FramedWriter<W> {
    name: String,
    layout: Option<Arc<dyn Layout>>,
    state: Mutex<FrameState<W>>,
}

#[derive(Debug)]
struct FrameState<W> {
    sink: W,
    started: bool,
    stopped: bool,
}

impl<W: Write> FramedWriter<W> {
    /// Create a writer for the named appender
    pub fn new(name: impl Into<String>, layout: Option<Arc<dyn Layout>>, sink: W) -> Self {
        Self {
            name: name.into(),
            layout,
            state: Mutex::new(FrameState {
                sink,
                started: false,
                stopped: false,
            }),
        }
    }

    /// Appender name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout, if any
    pub fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.layout.clone()
    }

    /// Format and write one event
    pub fn write_event(&self, event: &LogEvent) -> Result<()> {
        let bytes = match &self.layout {
            Some(layout) => layout.to_bytes(event),
            None => format_plain(event).into_bytes(),
        };
        let mut state = self.lock();
        if state.stopped {
            return Err(Error::appender(&self.name, "appender is stopped"));
        }
        self.start(&mut state)?;
        state
            .sink
            .write_all(&bytes)
            .and_then(|()| state.sink.flush())
            .map_err(|e| Error::appender(&self.name, e.to_string()))
    }

    /// Write the footer and refuse further events; later calls are no-ops
    pub fn stop(&self) -> Result<()> {
        let mut state = self.lock();
        if state.stopped {
            return Ok(());
        }
        self.start(&mut state)?;
        state.stopped = true;
        if let Some(footer) = self.layout.as_ref().and_then(|l| l.footer()) {
            state
                .sink
                .write_all(&footer)
                .map_err(|e| Error::appender(&self.name, e.to_string()))?;
        }
        state
            .sink
            .flush()
            .map_err(|e| Error::appender(&self.name, e.to_string()))
    }

    /// Whether [`stop`](Self::stop) has run
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Read the sink under the lock
    pub fn inspect<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.lock().sink)
    }

    fn start(&self, state: &mut FrameState<W>) -> Result<()> {
        if state.started {
            return Ok(());
        }
        state.started = true;
        if let Some(header) = self.layout.as_ref().and_then(|l| l.header()) {
            state
                .sink
                .write_all(&header)
                .map_err(|e| Error::appender(&self.name, e.to_string()))?;
        }
        Ok(())
    }

    // A panicking writer leaves the frame flags consistent; keep using it.
    fn lock(&self) -> MutexGuard<'_, FrameState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Single-line rendering used when an appender has no layout
///
/// `<millis> <LEVEL> [<thread>] <logger> - <message>`, followed by the
/// attached error chain on indented lines.
pub fn format_plain(event: &LogEvent) -> String {
    let logger = if event.logger_name.is_empty() {
        ROOT_LOGGER_LABEL
    } else {
        &event.logger_name
    };
    let mut line = format!(
        "{} {} [{}] {} - {}\n",
        event.timestamp_millis,
        event.level,
        event.thread_name,
        logger,
        event.message.as_deref().unwrap_or_default()
    );
    if let Some(thrown) = &event.thrown {
        for entry in throwable_lines(thrown.as_ref()) {
            line.push_str("    ");
            line.push_str(&entry);
            line.push('\n');
        }
    }
    line
}
