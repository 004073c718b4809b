//! Plugin Factories
//!
//! Generic construction of declared components:
//!
//! 1. look the declaration's type name up in the [`FactoryBinding`]
//! 2. coerce each attribute named by the plugin's parameter schema
//! 3. build nested declarations and hand them to element parameters
//! 4. invoke the plugin factory with the assembled [`PluginArgs`]
//!
//! Failures are scoped to the declaration that caused them.

pub mod args;
pub mod coerce;
pub mod resolver;

pub use args::{ArgValue, PluginArgs};
pub use resolver::{FactoryBinding, PluginFactoryResolver};
