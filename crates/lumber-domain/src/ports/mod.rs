//! Domain Port Interfaces
//!
//! Traits a logging backend and its pluggable components implement.
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`LoggerContextFactory`] | Every registered backend and the fallback backend |
//! | [`LoggerContext`], [`Logger`] | Backend-owned handles |
//! | [`MessageFactory`] | Message rendering strategies |
//! | [`Layout`] | Formatter plugins |
//! | [`Appender`] | Sink plugins |

pub mod appender;
pub mod backend;
pub mod component;
pub mod layout;

pub use appender::{Appender, AppenderMap};
pub use backend::{
    Logger, LoggerContext, LoggerContextFactory, MessageFactory, ParameterizedMessageFactory,
};
pub use component::ComponentInstance;
pub use layout::Layout;
