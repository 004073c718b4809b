//! # Infrastructure Layer
//!
//! Process-wide bootstrap and cross-cutting technical concerns.
//!
//! ## Module Categories
//!
//! ### Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`selector`] | Override → discovery → fallback backend selection |
//! | [`manager`] | Write-once backend cell, locator and `LogManager` |
//! | [`fallback`] | Built-in degraded-mode backend |
//! | [`components`] | Building and installing declared components |
//!
//! ### Configuration & Diagnostics
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Error context extensions |
//! | [`logging`] | Diagnostic logging with tracing |

pub mod components;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod fallback;
pub mod logging;
pub mod manager;
pub mod selector;

pub use config::{ConfigBuilder, ConfigLoader, LumberConfig};
pub use manager::{BackendCell, LogManager, LoggerContextLocator};
pub use selector::{ContextFactorySelector, SelectedBackend, Selection};
