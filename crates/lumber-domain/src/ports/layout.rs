//! Formatter port

use crate::value_objects::{Charset, LogEvent};

/// Turns events into encoded output fragments
///
/// Implementations are immutable after construction; every method is a pure
/// function of the configuration and its arguments.
pub trait Layout: Send + Sync + std::fmt::Debug {
    /// Render one event as text
    fn to_serializable(&self, event: &LogEvent) -> String;

    /// Document-open fragment, emitted once before the first event
    fn header(&self) -> Option<Vec<u8>>;

    /// Document-close fragment, emitted once after the last event
    fn footer(&self) -> Option<Vec<u8>>;

    /// Charset output bytes are encoded in
    fn charset(&self) -> Charset;

    /// Render one event as encoded bytes
    fn to_bytes(&self, event: &LogEvent) -> Vec<u8> {
        self.charset().encode(&self.to_serializable(event))
    }

    /// MIME type of the output
    fn content_type(&self) -> String {
        format!("text/plain; charset={}", self.charset())
    }
}
