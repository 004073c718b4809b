//! # Lumber - Provider Implementations
//!
//! Concrete backends and pluggable components. Everything here registers
//! itself into the `lumber-application` linkme tables, so linking this crate
//! is enough to make it discoverable.
//!
//! ## Provided Components
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Backend | `LoggerContextFactory` | [`StandardContextFactory`] |
//! | Layout | `Layout` | [`XmlLayout`] (`XMLLayout`) |
//! | Appender | `Appender` | [`ConsoleAppender`] (`Console`), [`MemoryAppender`] (`Memory`) |
//! | Appender set | - | `appenders` |
//!
//! ## Usage
//!
//! ```ignore
//! // Force the registrations into a binary that does not otherwise name the crate
//! extern crate lumber_providers;
//! ```

pub use lumber_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// Backend implementations
pub mod backend;

/// Layout implementations
pub mod layout;

/// Appender implementations and the appender table
pub mod appender;

pub use appender::{AppenderTable, ConsoleAppender, ConsoleTarget, MemoryAppender, collect_appenders};
pub use backend::{StandardContextFactory, StandardLoggerContext};
pub use layout::XmlLayout;
