//! # Domain Layer
//!
//! Core types shared by every lumber crate: the ports a logging backend and
//! its pluggable components implement, the values flowing through them, and
//! the error type.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias |
//! | [`constants`] | Names shared across layers |
//! | [`ports`] | Backend, context, logger, layout and appender traits |
//! | [`value_objects`] | Levels, events, charsets, realms, component declarations |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    Appender, AppenderMap, ComponentInstance, Layout, Logger, LoggerContext,
    LoggerContextFactory, MessageFactory, ParameterizedMessageFactory,
};
pub use value_objects::{
    Charset, ComponentDeclaration, ElementType, IsolationKey, Level, LogEvent, SourceLocation,
};
