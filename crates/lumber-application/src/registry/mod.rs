//! Registration Tables
//!
//! Backends and plugins register themselves at link time through `linkme`
//! distributed slices instead of being looked up reflectively by name.
//!
//! ### Registering a Backend (in lumber-providers)
//!
//! ```ignore
//! use lumber_application::registry::{BackendFactoryEntry, BACKEND_FACTORIES};
//!
//! #[linkme::distributed_slice(BACKEND_FACTORIES)]
//! static STANDARD: BackendFactoryEntry = BackendFactoryEntry {
//!     class_name: "lumber.providers.StandardContextFactory",
//!     description: "Standard backend with per-realm contexts",
//!     factory: || Ok(Arc::new(StandardContextFactory::new())),
//! };
//! ```
//!
//! A backend only takes part in discovery when a metadata record naming its
//! `class_name` is also reachable, either linked via [`PROVIDER_SOURCES`] or
//! found on a configured search path.

pub mod backend;
pub mod plugin;

pub use backend::{
    BACKEND_FACTORIES, BackendFactoryEntry, PROVIDER_SOURCES, ProviderSourceEntry,
    list_backends, lookup_backend,
};
pub use plugin::{PLUGINS, ParameterKind, ParameterSpec, PluginEntry, list_plugins};
