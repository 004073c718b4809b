//! Appender implementations
//!
//! | Plugin | Type | Sink |
//! |--------|------|------|
//! | `Console` | [`ConsoleAppender`] | Standard output or standard error |
//! | `Memory` | [`MemoryAppender`] | In-process byte buffer, retrievable by name |
//! | `appenders` | [`collect_appenders`] | Complete name → appender mapping |
//!
//! Every appender writes its layout's header before the first event and the
//! footer when stopped. [`AppenderTable`] publishes whole mappings to the
//! loggers of a context.

pub mod console;
pub mod framed;
pub mod memory;
pub mod set;
pub mod table;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use framed::{FramedWriter, format_plain};
pub use memory::MemoryAppender;
pub use set::collect_appenders;
pub use table::AppenderTable;
