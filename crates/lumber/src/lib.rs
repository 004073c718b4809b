//! # Lumber
//!
//! A logging facade that binds to a backend at runtime.
//!
//! On first use the facade selects exactly one backend for the process:
//! a configured override, else the highest-priority provider discovered
//! from linked and on-disk records, else a built-in fallback that keeps
//! logging alive in degraded mode. Layouts and appenders are declared in
//! configuration and built by name through the plugin registry.
//!
//! ## Example
//!
//! ```ignore
//! use lumber::{Level, LogManager};
//!
//! let logger = LogManager::get_logger("app.http");
//! logger.log(Level::Info, "listening");
//! logger.log_args(Level::Warn, "slow request took {} ms", &[&1250]);
//! ```
//!
//! ## Configuration
//!
//! `lumber.toml` in the working directory (or `LUMBER_*` variables):
//!
//! ```toml
//! [manager]
//! logger_context_factory = "lumber.providers.StandardContextFactory"
//!
//! [[components]]
//! type = "Console"
//! attributes = { name = "stdout" }
//!
//! [[components.children]]
//! type = "XMLLayout"
//! attributes = { complete = true }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, value objects and errors
//! - `application` - provider discovery, version gate and plugin factories
//! - `providers` - standard backend, XML layout and appenders
//! - `infrastructure` - backend selection, log manager and configuration

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use lumber_domain::*;
}

/// Application layer - discovery and plugin factories
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use lumber_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use lumber_providers::*;
}

/// Infrastructure layer - selection, log manager and configuration
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use lumber_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the process entry points
pub use infrastructure::{ConfigBuilder, ConfigLoader, LogManager, LumberConfig, Selection};
