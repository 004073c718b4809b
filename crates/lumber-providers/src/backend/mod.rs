//! Backend implementations
//!
//! Each backend registers a factory in `BACKEND_FACTORIES` and a discovery
//! record in `PROVIDER_SOURCES`; the bootstrap selects among them by
//! priority.

pub mod standard;

pub use standard::{StandardContextFactory, StandardLogger, StandardLoggerContext};
