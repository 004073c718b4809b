//! # Application Layer
//!
//! Bootstrap logic that is independent of any concrete backend:
//!
//! - [`version`] decides whether a provider's declared API version is acceptable
//! - [`discovery`] enumerates provider metadata records, instantiates the
//!   declared backends and orders them by priority
//! - [`registry`] declares the linkme registration tables backends and plugins
//!   add themselves to
//! - [`plugins`] turns component declarations into instances through the
//!   registered plugin factories
//!
//! ## Registration Flow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ lumber-providers                                             │
//! │   #[distributed_slice(BACKEND_FACTORIES)]  class → factory   │
//! │   #[distributed_slice(PROVIDER_SOURCES)]   metadata record   │
//! │   #[distributed_slice(PLUGINS)]            name → schema     │
//! └──────────────────────────────────────────────────────────────┘
//!                    │ link time
//!                    ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ ProviderRegistry::discover()     PluginFactoryResolver::build │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod constants;
pub mod discovery;
pub mod plugins;
pub mod registry;
pub mod version;

pub use discovery::{
    BackendCatalog, ChainedSources, DirectorySources, LinkedCatalog, LinkedSources,
    ProviderDescriptor, ProviderMetadata, ProviderRegistry, ProviderSource, SourceLocator,
};
pub use plugins::{ArgValue, FactoryBinding, PluginArgs, PluginFactoryResolver};
pub use registry::{
    BACKEND_FACTORIES, BackendFactoryEntry, PLUGINS, PROVIDER_SOURCES, ParameterKind,
    ParameterSpec, PluginEntry, ProviderSourceEntry,
};
pub use version::is_compatible;
