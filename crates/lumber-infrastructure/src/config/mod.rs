//! Configuration
//!
//! `lumber.toml`, merged with `LUMBER_*` environment variables through
//! Figment:
//!
//! ```toml
//! [manager]
//! logger_context_factory = "lumber.providers.StandardContextFactory"
//! provider_search_path = ["/opt/app/plugins"]
//!
//! [logging]
//! level = "info"
//!
//! [[components]]
//! type = "Console"
//! attributes = { name = "stdout" }
//! children = [{ type = "XMLLayout", attributes = { complete = true } }]
//! ```

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{LoggingConfig, LumberConfig, ManagerConfig};
